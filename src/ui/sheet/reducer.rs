//! Reducer for the bill sheet.

use crate::ui::mvi::Reducer;

use super::intent::SheetIntent;
use super::state::{Field, RowDraft, SheetState};

/// Pure: the caller pushes edited names and orders into the participant
/// store after dispatch.
pub struct SheetReducer;

impl Reducer for SheetReducer {
    type State = SheetState;
    type Intent = SheetIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SheetIntent::Load { rows } => {
                let focus = rows
                    .first()
                    .map(|row| Field::Name(row.id))
                    .unwrap_or(Field::SharedCost);
                SheetState {
                    rows,
                    focus,
                    ..state
                }
            }
            SheetIntent::Insert(ch) => {
                let field = state.focus;
                if let Some(text) = state.text_mut(field) {
                    if accepts(field, text, ch) {
                        text.push(ch);
                    }
                }
                state
            }
            SheetIntent::Backspace => {
                let field = state.focus;
                if let Some(text) = state.text_mut(field) {
                    text.pop();
                }
                state
            }
            SheetIntent::FocusNext => {
                state.focus = step(&state, 1);
                state
            }
            SheetIntent::FocusPrev => {
                state.focus = step(&state, -1);
                state
            }
            SheetIntent::Focus(field) => {
                if state.text(field).is_some() {
                    state.focus = field;
                }
                state
            }
            SheetIntent::SyncOrder { id, text } => {
                if let Some(order) = state.text_mut(Field::Order(id)) {
                    *order = text;
                }
                state
            }
            SheetIntent::RowAdded { id } => {
                if state.row(id).is_none() {
                    state.rows.push(RowDraft::blank(id));
                }
                state.focus = Field::Name(id);
                state
            }
            SheetIntent::RowRemoved { id } => {
                let Some(index) = state.row_index(id) else {
                    return state;
                };
                state.rows.remove(index);
                if state.focus.participant() == Some(id) {
                    // Land on the row that slid into place, else the one above.
                    state.focus = state
                        .rows
                        .get(index)
                        .or_else(|| index.checked_sub(1).and_then(|i| state.rows.get(i)))
                        .map(|row| Field::Name(row.id))
                        .unwrap_or(Field::SharedCost);
                }
                state
            }
        }
    }
}

fn accepts(field: Field, current: &str, ch: char) -> bool {
    if ch.is_control() {
        return false;
    }
    if !field.is_numeric() {
        return true;
    }
    ch.is_ascii_digit() || (ch == '.' && !current.contains('.'))
}

/// Field `delta` steps away from the focus in tab order, wrapping.
fn step(state: &SheetState, delta: isize) -> Field {
    let fields = state.fields();
    let len = fields.len() as isize;
    let current = fields
        .iter()
        .position(|field| *field == state.focus)
        .unwrap_or(0) as isize;
    fields[(current + delta).rem_euclid(len) as usize]
}
