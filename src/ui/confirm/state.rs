use crate::split::Total;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConfirmState {
    #[default]
    Unconfirmed,
    /// A valid, positive total was confirmed.
    Confirmed { total: Total },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn total(&self) -> Option<Total> {
        match self {
            Self::Confirmed { total } => Some(*total),
            Self::Unconfirmed => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}
