//! Trend analysis over occurrence counts.

/// Ratio of the recent count to the historical baseline.
///
/// The denominator is floored at one, so a baseline of zero behaves like a
/// baseline of one. The result is non-negative and unbounded above.
///
/// # Examples
/// ```
/// use biosentinel_core::trend_ratio;
///
/// assert_eq!(trend_ratio(300, 100), 3.0);
/// assert_eq!(trend_ratio(5, 0), 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the trend signal is a floating-point ratio"
)]
pub fn trend_ratio(recent_count: u32, historical_baseline: u32) -> f64 {
    f64::from(recent_count) / f64::from(historical_baseline.max(1))
}
