//! Share calculation.
//!
//! ```text
//! share(p) = ((p.order + shared / count) / (total_order + shared)) * total
//! ```
//!
//! The shared item is spread evenly over everyone before each participant
//! takes their proportion of the grand total, so included shares sum to
//! `total`.

mod amount;

pub use amount::{SharedCost, Total};

use crate::roster::{Participant, ParticipantId};

/// Shown when no participant has a positive order.
pub const NO_DISTRIBUTION_MESSAGE: &str = "Enter at least one non-zero order.";

/// Label used for participants with an empty name.
pub const UNNAMED: &str = "Unnamed";

/// One participant's portion of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub id: ParticipantId,
    pub name: String,
    pub amount: f64,
}

impl Share {
    /// Name to show, with [`UNNAMED`] standing in for an empty name.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNNAMED
        } else {
            &self.name
        }
    }

    /// `"<name>: <currency><amount>"` with two decimal places.
    pub fn format(&self, currency: &str) -> String {
        format!("{}: {}{:.2}", self.display_name(), currency, self.amount)
    }
}

/// Result of running the calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// Positive shares, in participant order.
    Shares(Vec<Share>),
    /// Orders sum to zero; nothing to proportion.
    NoValidDistribution,
}

impl Distribution {
    pub fn shares(&self) -> &[Share] {
        match self {
            Self::Shares(shares) => shares,
            Self::NoValidDistribution => &[],
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Shares(_))
    }
}

/// Split `total` across `participants`. Pure; reads only the snapshot.
pub fn compute_shares(participants: &[Participant], shared: SharedCost, total: Total) -> Distribution {
    let total_order: f64 = participants.iter().map(|p| p.order.value()).sum();
    if participants.is_empty() || total_order <= 0.0 {
        return Distribution::NoValidDistribution;
    }

    let shared = shared.value();
    let per_head = shared / participants.len() as f64;
    let denominator = total_order + shared;

    let shares = participants
        .iter()
        .filter_map(|p| {
            let amount = ((p.order.value() + per_head) / denominator) * total.value();
            (amount > 0.0).then(|| Share {
                id: p.id,
                name: p.name.clone(),
                amount,
            })
        })
        .collect();

    Distribution::Shares(shares)
}
