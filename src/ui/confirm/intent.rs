use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// User confirmed the total field (Enter on the field, or Ctrl+T).
    Submit { input: String },
    /// Total text changed after confirmation.
    TotalEdited,
}

impl Intent for ConfirmIntent {}
