//! State for the bill sheet: the text in every editable field and which
//! field has focus.

use crate::roster::{Order, Participant, ParticipantId};
use crate::ui::mvi::UiState;

/// An editable field, addressed by participant id rather than row position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    SharedCost,
    Name(ParticipantId),
    Order(ParticipantId),
    Total,
}

impl Field {
    /// Numeric fields accept only digits and a single decimal point.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Name(_))
    }

    pub fn participant(&self) -> Option<ParticipantId> {
        match self {
            Self::Name(id) | Self::Order(id) => Some(*id),
            Self::SharedCost | Self::Total => None,
        }
    }
}

/// Text currently typed into one participant row.
///
/// `order` is the raw text, which may be partial ("2.") and therefore
/// differ from the order held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDraft {
    pub id: ParticipantId,
    pub name: String,
    pub order: String,
}

impl RowDraft {
    pub fn blank(id: ParticipantId) -> Self {
        Self {
            id,
            name: String::new(),
            order: String::new(),
        }
    }
}

/// Field text for a stored order. Zero renders as the placeholder so
/// typing doesn't produce "03".
pub fn order_text(order: Order) -> String {
    if order.value() > 0.0 {
        order.value().to_string()
    } else {
        String::new()
    }
}

impl From<&Participant> for RowDraft {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name.clone(),
            order: order_text(participant.order),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetState {
    pub rows: Vec<RowDraft>,
    pub shared_cost: String,
    pub total: String,
    pub focus: Field,
}

impl UiState for SheetState {}

impl SheetState {
    /// Fields in tab order: shared cost, then name and order per row,
    /// then the total.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(self.rows.len() * 2 + 2);
        fields.push(Field::SharedCost);
        for row in &self.rows {
            fields.push(Field::Name(row.id));
            fields.push(Field::Order(row.id));
        }
        fields.push(Field::Total);
        fields
    }

    pub fn row(&self, id: ParticipantId) -> Option<&RowDraft> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn row_index(&self, id: ParticipantId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Text of `field`, or `None` if it names a row that no longer exists.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::SharedCost => Some(&self.shared_cost),
            Field::Total => Some(&self.total),
            Field::Name(id) => self.row(id).map(|row| row.name.as_str()),
            Field::Order(id) => self.row(id).map(|row| row.order.as_str()),
        }
    }

    pub fn focused_text(&self) -> &str {
        self.text(self.focus).unwrap_or_default()
    }

    pub(super) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::SharedCost => Some(&mut self.shared_cost),
            Field::Total => Some(&mut self.total),
            Field::Name(id) => self
                .rows
                .iter_mut()
                .find(|row| row.id == id)
                .map(|row| &mut row.name),
            Field::Order(id) => self
                .rows
                .iter_mut()
                .find(|row| row.id == id)
                .map(|row| &mut row.order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_focuses_shared_cost() {
        assert_eq!(SheetState::default().focus, Field::SharedCost);
    }

    #[test]
    fn fields_follow_row_order() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        let state = SheetState {
            rows: vec![RowDraft::blank(a), RowDraft::blank(b)],
            ..SheetState::default()
        };
        assert_eq!(
            state.fields(),
            vec![
                Field::SharedCost,
                Field::Name(a),
                Field::Order(a),
                Field::Name(b),
                Field::Order(b),
                Field::Total,
            ]
        );
    }

    #[test]
    fn draft_from_participant_hides_zero_order() {
        let fresh = Participant::new("Alice");
        assert_eq!(RowDraft::from(&fresh).order, "");
        let weighted = Participant::new("Bob").with_order(Order::new(2.5).unwrap());
        assert_eq!(RowDraft::from(&weighted).order, "2.5");
    }

    #[test]
    fn text_of_missing_row_is_none() {
        let state = SheetState::default();
        assert_eq!(state.text(Field::Name(ParticipantId::new())), None);
        assert_eq!(state.focused_text(), "");
    }
}
