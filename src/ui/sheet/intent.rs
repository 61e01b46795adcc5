use crate::roster::ParticipantId;
use crate::ui::mvi::Intent;

use super::state::{Field, RowDraft};

#[derive(Debug, Clone)]
pub enum SheetIntent {
    /// Replace all rows, e.g. with the participants restored at startup.
    Load { rows: Vec<RowDraft> },
    /// Typed character into the focused field.
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Focus(Field),
    /// Replace a row's order text with what the store holds.
    SyncOrder { id: ParticipantId, text: String },
    /// A participant was appended to the store. Focuses its name.
    RowAdded { id: ParticipantId },
    /// A participant was removed from the store.
    RowRemoved { id: ParticipantId },
}

impl Intent for SheetIntent {}
