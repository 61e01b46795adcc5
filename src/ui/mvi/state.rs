//! Marker for view state.

/// Everything a view needs to draw itself. `Default` is the state before
/// any intent has been applied.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
