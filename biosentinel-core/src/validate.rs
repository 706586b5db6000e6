//! Field validators shared by the domain feature sets.
//!
//! Each helper names the field it checks so the resulting [`InputError`]
//! points callers at the offending input.

use crate::InputError;

/// Require `value` to be finite and within `0.0..=1.0`.
///
/// # Errors
/// Returns [`InputError::NonFinite`] for NaN or infinite values and
/// [`InputError::OutOfRange`] for values outside the unit interval.
///
/// # Examples
/// ```
/// use biosentinel_core::validate::unit_interval;
///
/// assert_eq!(unit_interval("humanProximity", 0.7), Ok(0.7));
/// assert!(unit_interval("humanProximity", 1.2).is_err());
/// ```
pub fn unit_interval(field: &'static str, value: f64) -> Result<f64, InputError> {
    in_range(field, value, 0.0, 1.0)
}

/// Require `value` to be finite and within `min..=max`.
///
/// # Errors
/// Returns [`InputError::NonFinite`] or [`InputError::OutOfRange`].
pub fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Convert a signed count into a `u32`, rejecting negatives.
///
/// # Errors
/// Returns [`InputError::InvalidCount`] when `value` is negative or exceeds
/// `u32::MAX`.
///
/// # Examples
/// ```
/// use biosentinel_core::validate::count;
///
/// assert_eq!(count("recentCount", 300), Ok(300));
/// assert!(count("recentCount", -1).is_err());
/// ```
pub fn count(field: &'static str, value: i64) -> Result<u32, InputError> {
    u32::try_from(value).map_err(|_| InputError::InvalidCount { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(0.55)]
    fn unit_interval_accepts_boundaries(#[case] value: f64) {
        assert_eq!(unit_interval("field", value), Ok(value));
    }

    #[rstest]
    #[case(-0.01)]
    #[case(1.01)]
    fn unit_interval_rejects_out_of_range(#[case] value: f64) {
        assert!(matches!(
            unit_interval("field", value),
            Err(InputError::OutOfRange { field: "field", .. })
        ));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn unit_interval_rejects_non_finite(#[case] value: f64) {
        assert_eq!(
            unit_interval("field", value),
            Err(InputError::NonFinite { field: "field" })
        );
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::from(u32::MAX) + 1)]
    fn count_rejects_unrepresentable(#[case] value: i64) {
        assert_eq!(
            count("recentCount", value),
            Err(InputError::InvalidCount {
                field: "recentCount",
                value
            })
        );
    }
}
