//! Score a domain feature set.
//!
//! The `RiskScorer` trait is the single synchronous entry point of every
//! scoring domain: one validated feature set in, one immutable result out.

/// Turn a validated feature set into a result.
///
/// Implementations must be pure: no I/O, no shared mutable state, and the
/// same features must always produce the same output. They must be
/// thread-safe (`Send` + `Sync`) so handlers can score concurrently.
/// Scoring is infallible; invalid input is rejected when the feature set is
/// constructed.
///
/// # Examples
///
/// ```rust
/// use biosentinel_core::{RiskScorer, RiskTier};
///
/// struct ThresholdScorer;
///
/// impl RiskScorer for ThresholdScorer {
///     type Features = f64;
///     type Output = RiskTier;
///
///     fn score(&self, features: &f64) -> RiskTier {
///         RiskTier::classify(*features)
///     }
/// }
///
/// assert_eq!(ThresholdScorer.score(&2.5), RiskTier::High);
/// ```
pub trait RiskScorer: Send + Sync {
    /// Validated input for one scoring request.
    type Features;
    /// Result handed back to the caller.
    type Output;

    /// Score `features`.
    fn score(&self, features: &Self::Features) -> Self::Output;
}
