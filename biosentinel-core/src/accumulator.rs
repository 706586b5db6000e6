//! Running total and reasons collected while a rule table is evaluated.

use crate::{RiskTier, Score, Weight};

/// Mutable state owned by a single rule evaluation.
///
/// Reasons are kept in the order rules fired; that order is surfaced to
/// callers verbatim.
///
/// # Examples
/// ```
/// use biosentinel_core::{RiskTier, ScoreAccumulator, Weight};
///
/// let mut acc = ScoreAccumulator::new();
/// acc.record(Weight::from_centis(150), "Endangered species detected".to_owned());
/// acc.record(Weight::from_centis(80), "Near human-populated areas".to_owned());
/// assert_eq!(acc.total().centis(), 230);
/// assert_eq!(acc.tier(), RiskTier::High);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreAccumulator {
    total: Score,
    reasons: Vec<String>,
}

impl ScoreAccumulator {
    /// Start with a zero total and no reasons.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: Score::ZERO,
            reasons: Vec::new(),
        }
    }

    /// Add a fired rule's weight and its reason.
    pub fn record(&mut self, weight: Weight, reason: String) {
        self.total = self.total.plus(weight);
        self.reasons.push(reason);
    }

    /// Return the accumulated total.
    #[must_use]
    pub const fn total(&self) -> Score {
        self.total
    }

    /// Return the reasons in firing order.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Classify the current total.
    #[must_use]
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.total)
    }

    /// Consume the accumulator, returning the total and reasons.
    #[must_use]
    pub fn into_parts(self) -> (Score, Vec<String>) {
        (self.total, self.reasons)
    }
}
