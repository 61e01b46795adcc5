use std::fmt;

use uuid::Uuid;

/// Opaque participant identity, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Relative consumption weight. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Order(f64);

impl Order {
    pub const ZERO: Order = Order(0.0);

    /// Returns `None` for negative, NaN or infinite weights.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    /// Parse user text. Partial or invalid entry yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<f64>().ok().and_then(Self::new)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub order: Order,
}

impl Participant {
    /// A fresh participant with a new id and zero order.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            order: Order::ZERO,
        }
    }

    pub fn blank() -> Self {
        Self::new(String::new())
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Participant::blank();
        let b = Participant::blank();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn order_rejects_negative_and_non_finite() {
        assert_eq!(Order::new(-1.0), None);
        assert_eq!(Order::new(f64::NAN), None);
        assert_eq!(Order::new(f64::INFINITY), None);
        assert_eq!(Order::new(0.0), Some(Order::ZERO));
    }

    #[test]
    fn order_parse_tolerates_whitespace() {
        assert_eq!(Order::parse(" 2.5 ").map(Order::value), Some(2.5));
        assert_eq!(Order::parse("2."), Order::new(2.0));
        assert_eq!(Order::parse(""), None);
        assert_eq!(Order::parse("."), None);
        assert_eq!(Order::parse("-3"), None);
    }
}
