//! Total confirmation feature module.
//!
//! Shares are shown only after the user confirms a valid total. Editing
//! the total text afterwards withdraws the confirmation.

mod intent;
mod reducer;
mod state;

pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::ConfirmState;
