//! Assembly of immutable scoring results.
//!
//! Totals and ratio fields are rounded half away from zero (the behaviour
//! of [`f64::round`]) before they leave the engine.

use crate::{RiskTier, ScoreAccumulator};

/// Outcome of scoring one feature set.
///
/// `details` carries domain-specific auxiliary fields and is flattened into
/// the serialised object alongside `riskScore`, `riskLevel` and `reason`.
///
/// # Examples
/// ```
/// use biosentinel_core::{RiskTier, ScoreAccumulator, ScoringResult, Weight};
///
/// let mut acc = ScoreAccumulator::new();
/// acc.record(Weight::from_centis(100), "Decline in sightings (0.1x average)".to_owned());
/// let result = ScoringResult::assemble(acc, ());
/// assert_eq!(result.total, 1.0);
/// assert_eq!(result.tier, RiskTier::AtRisk);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringResult<D> {
    /// Sum of fired rule weights, rounded to two decimals.
    #[cfg_attr(feature = "serde", serde(rename = "riskScore"))]
    pub total: f64,
    /// Tier derived from the unrounded total.
    #[cfg_attr(feature = "serde", serde(rename = "riskLevel"))]
    pub tier: RiskTier,
    /// Reasons in the order their rules fired.
    #[cfg_attr(feature = "serde", serde(rename = "reason"))]
    pub reasons: Vec<String>,
    /// Domain auxiliary fields.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: D,
}

impl<D> ScoringResult<D> {
    /// Package an evaluated accumulator and domain details.
    #[must_use]
    pub fn assemble(accumulator: ScoreAccumulator, details: D) -> Self {
        let (score, reasons) = accumulator.into_parts();
        Self {
            total: round_to(score.as_points(), 2),
            tier: RiskTier::from_score(score),
            reasons,
            details,
        }
    }
}

/// Round `value` to `places` decimal places, half away from zero.
///
/// # Examples
/// ```
/// use biosentinel_core::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(2.0 / 3.0, 4), 0.6667);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales, rounds, and rescales"
)]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10.0_f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weight;
    use rstest::rstest;

    #[rstest]
    #[case(0.333_333, 2, 0.33)]
    #[case(1.005_1, 2, 1.01)]
    #[case(-0.125, 2, -0.13)]
    #[case(3.8, 2, 3.8)]
    #[case(0.123_456, 4, 0.123_5)]
    fn rounds_half_away_from_zero(#[case] value: f64, #[case] places: i32, #[case] expected: f64) {
        assert_eq!(round_to(value, places), expected);
    }

    #[rstest]
    fn assemble_keeps_reason_order_and_classifies() {
        let mut acc = ScoreAccumulator::new();
        acc.record(Weight::from_centis(150), "a".to_owned());
        acc.record(Weight::from_centis(150), "b".to_owned());
        acc.record(Weight::from_centis(80), "c".to_owned());
        let result = ScoringResult::assemble(acc, 7_u8);
        assert_eq!(result.total, 3.8);
        assert_eq!(result.tier, RiskTier::Critical);
        assert_eq!(result.reasons, ["a", "b", "c"]);
        assert_eq!(result.details, 7);
    }
}
