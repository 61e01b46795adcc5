use crate::roster::{OrderEdit, ParticipantStore};
use crate::split::{compute_shares, Distribution, SharedCost};
use crate::ui::confirm::{ConfirmIntent, ConfirmReducer, ConfirmState};
use crate::ui::mvi::Reducer;
use crate::ui::sheet::{order_text, Field, RowDraft, SheetIntent, SheetReducer, SheetState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Participants and the names cache (resource, managed outside MVI).
    store: ParticipantStore,
    /// Field text and focus (MVI pattern).
    sheet: SheetState,
    /// Whether the total has been confirmed (MVI pattern).
    confirm: ConfirmState,
    currency: String,
}

impl App {
    pub fn new(store: ParticipantStore, currency: impl Into<String>) -> Self {
        let rows = store.participants().iter().map(RowDraft::from).collect();
        let mut app = Self {
            should_quit: false,
            store,
            sheet: SheetState::default(),
            confirm: ConfirmState::default(),
            currency: currency.into(),
        };
        app.dispatch_sheet(SheetIntent::Load { rows });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn sheet(&self) -> &SheetState {
        &self.sheet
    }

    pub fn confirm_state(&self) -> ConfirmState {
        self.confirm
    }

    pub fn store(&self) -> &ParticipantStore {
        &self.store
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Shares for the confirmed total, recomputed from the current
    /// participants and shared cost. `None` until a total is confirmed.
    pub fn distribution(&self) -> Option<Distribution> {
        let total = self.confirm.total()?;
        Some(compute_shares(
            self.store.participants(),
            SharedCost::parse(&self.sheet.shared_cost),
            total,
        ))
    }

    pub fn type_char(&mut self, ch: char) {
        self.edit_focused(SheetIntent::Insert(ch));
    }

    pub fn backspace(&mut self) {
        self.edit_focused(SheetIntent::Backspace);
    }

    pub fn focus_next(&mut self) {
        self.sync_leaving_order();
        self.dispatch_sheet(SheetIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        self.sync_leaving_order();
        self.dispatch_sheet(SheetIntent::FocusPrev);
    }

    /// Enter confirms on the total field and advances everywhere else.
    pub fn on_enter(&mut self) {
        if self.sheet.focus == Field::Total {
            self.confirm_total();
        } else {
            self.focus_next();
        }
    }

    /// Move to the total field and confirm whatever it holds.
    pub fn confirm_total(&mut self) {
        self.sync_leaving_order();
        self.dispatch_sheet(SheetIntent::Focus(Field::Total));
        let input = self.sheet.total.clone();
        self.dispatch_confirm(ConfirmIntent::Submit { input });
        tracing::debug!(confirmed = self.confirm.is_confirmed(), "Total submitted");
    }

    pub fn add_participant(&mut self) {
        self.sync_leaving_order();
        let id = self.store.add_participant();
        self.dispatch_sheet(SheetIntent::RowAdded { id });
    }

    /// Delete the participant whose row has focus. No-op elsewhere.
    pub fn remove_focused(&mut self) {
        let Some(id) = self.sheet.focus.participant() else {
            return;
        };
        match self.store.remove_participant(id) {
            Ok(removed) => {
                tracing::debug!(id = %removed.id, "Removed participant");
                self.dispatch_sheet(SheetIntent::RowRemoved { id });
            }
            Err(err) => tracing::warn!("Remove ignored: {}", err),
        }
    }

    /// Apply an edit to the focused field, then push any text change into
    /// the store or the confirmation state.
    fn edit_focused(&mut self, intent: SheetIntent) {
        let field = self.sheet.focus;
        let before = self.sheet.focused_text().to_string();
        self.dispatch_sheet(intent);
        let after = self.sheet.focused_text().to_string();
        if before == after {
            return;
        }

        match field {
            Field::Name(id) => {
                if let Err(err) = self.store.update_name(id, &after) {
                    tracing::warn!("Name edit ignored: {}", err);
                }
            }
            Field::Order(id) => match self.store.update_order(id, &after) {
                Ok(OrderEdit::Applied(order)) => {
                    tracing::trace!(id = %id, order = order.value(), "Order updated");
                }
                Ok(OrderEdit::Ignored) => {}
                Err(err) => tracing::warn!("Order edit ignored: {}", err),
            },
            Field::Total => self.dispatch_confirm(ConfirmIntent::TotalEdited),
            // Read on demand by `distribution`.
            Field::SharedCost => {}
        }
    }

    /// Before focus leaves an order field, show the order the calculator
    /// uses. Partial or cleared text never reached the store.
    fn sync_leaving_order(&mut self) {
        let Field::Order(id) = self.sheet.focus else {
            return;
        };
        let Some(participant) = self.store.get(id) else {
            return;
        };
        let text = order_text(participant.order);
        if self.sheet.focused_text() != text {
            self.dispatch_sheet(SheetIntent::SyncOrder { id, text });
        }
    }

    fn dispatch_sheet(&mut self, intent: SheetIntent) {
        dispatch_mvi!(self, sheet, SheetReducer, intent);
    }

    fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }
}
