//! Bill sheet feature module.
//!
//! Holds the editable text of the shared-item, participant and total fields
//! and tracks focus.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Field text and focus
//! - `intent.rs` - Typing, navigation, row add/remove
//! - `reducer.rs` - State transitions (pure, no store access)

mod intent;
mod reducer;
mod state;

pub use intent::SheetIntent;
pub use reducer::SheetReducer;
pub use state::{order_text, Field, RowDraft, SheetState};
