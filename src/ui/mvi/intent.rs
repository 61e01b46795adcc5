//! Marker for user actions fed to a reducer.

/// A key press translated into something a reducer understands
/// (typing into a field, moving focus, confirming the total).
pub trait Intent: Send + 'static {}
