/// A confirmed grand total. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Total(f64);

impl Total {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Parse the total field. `None` means the input is not ready yet.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<f64>().ok().and_then(Self::new)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Cost of the item split evenly across everyone.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SharedCost(f64);

impl SharedCost {
    pub const ZERO: SharedCost = SharedCost(0.0);

    /// Negative or non-finite amounts collapse to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Unparsable text counts as no shared item.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self::ZERO)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_requires_positive_number() {
        assert_eq!(Total::parse("120").map(Total::value), Some(120.0));
        assert_eq!(Total::parse(" 9.5 ").map(Total::value), Some(9.5));
        assert_eq!(Total::parse("0"), None);
        assert_eq!(Total::parse("-4"), None);
        assert_eq!(Total::parse(""), None);
        assert_eq!(Total::parse("12.3.4"), None);
        assert_eq!(Total::parse("inf"), None);
    }

    #[test]
    fn shared_cost_defaults_to_zero() {
        assert_eq!(SharedCost::parse(""), SharedCost::ZERO);
        assert_eq!(SharedCost::parse("abc"), SharedCost::ZERO);
        assert_eq!(SharedCost::parse("-5"), SharedCost::ZERO);
        assert_eq!(SharedCost::parse("20").value(), 20.0);
    }
}
