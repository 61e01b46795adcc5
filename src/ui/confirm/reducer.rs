use crate::split::Total;
use crate::ui::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::ConfirmState;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Input that isn't a positive number leaves nothing to show.
            ConfirmIntent::Submit { input } => match Total::parse(&input) {
                Some(total) => ConfirmState::Confirmed { total },
                None => ConfirmState::Unconfirmed,
            },
            ConfirmIntent::TotalEdited => ConfirmState::Unconfirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: ConfirmState, input: &str) -> ConfirmState {
        ConfirmReducer::reduce(
            state,
            ConfirmIntent::Submit {
                input: input.to_string(),
            },
        )
    }

    #[test]
    fn unconfirmed_is_default() {
        assert_eq!(ConfirmState::default(), ConfirmState::Unconfirmed);
    }

    #[test]
    fn valid_total_confirms() {
        let state = submit(ConfirmState::Unconfirmed, "120");
        assert_eq!(state.total().map(Total::value), Some(120.0));
    }

    #[test]
    fn invalid_total_stays_unconfirmed() {
        for input in ["", "0", "abc", "-3"] {
            assert!(!submit(ConfirmState::Unconfirmed, input).is_confirmed());
        }
    }

    #[test]
    fn resubmitting_invalid_total_withdraws_confirmation() {
        let state = submit(ConfirmState::Unconfirmed, "50");
        let state = submit(state, "");
        assert!(!state.is_confirmed());
    }

    #[test]
    fn editing_total_withdraws_confirmation() {
        let state = submit(ConfirmState::Unconfirmed, "50");
        let state = ConfirmReducer::reduce(state, ConfirmIntent::TotalEdited);
        assert_eq!(state, ConfirmState::Unconfirmed);
    }
}
