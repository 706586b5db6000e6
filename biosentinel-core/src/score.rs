//! Fixed-point score arithmetic.
//!
//! Rule weights and running totals are whole centi-points (hundredths of a
//! point). Sums stay exact, so a total of `2.0` lands on the `High`
//! breakpoint rather than a hair below it. Conversion to `f64` happens only
//! at the output boundary.

use std::fmt;

const CENTIS_PER_POINT: f64 = 100.0;

/// Weight contributed by a rule when it fires, in centi-points.
///
/// # Examples
/// ```
/// use biosentinel_core::Weight;
///
/// let weight = Weight::from_centis(150);
/// assert_eq!(weight.centis(), 150);
/// assert_eq!(weight.as_points(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Weight(u32);

impl Weight {
    /// A weight that contributes nothing.
    pub const ZERO: Self = Self(0);

    /// Build a weight from whole centi-points.
    #[must_use]
    pub const fn from_centis(centis: u32) -> Self {
        Self(centis)
    }

    /// Return the weight in centi-points.
    #[must_use]
    pub const fn centis(self) -> u32 {
        self.0
    }

    /// Return the weight in points.
    #[must_use]
    pub fn as_points(self) -> f64 {
        to_points(self.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_points())
    }
}

/// Accumulated total of fired rule weights, in centi-points.
///
/// # Examples
/// ```
/// use biosentinel_core::{Score, Weight};
///
/// let total = Score::ZERO
///     .plus(Weight::from_centis(150))
///     .plus(Weight::from_centis(80));
/// assert_eq!(total.centis(), 230);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u32);

impl Score {
    /// The empty total.
    pub const ZERO: Self = Self(0);

    /// Build a total from whole centi-points.
    #[must_use]
    pub const fn from_centis(centis: u32) -> Self {
        Self(centis)
    }

    /// Return the total in centi-points.
    #[must_use]
    pub const fn centis(self) -> u32 {
        self.0
    }

    /// Add a fired weight to the total. Saturates rather than wrapping.
    #[must_use]
    pub const fn plus(self, weight: Weight) -> Self {
        Self(self.0.saturating_add(weight.0))
    }

    /// Return the total in points.
    #[must_use]
    pub fn as_points(self) -> f64 {
        to_points(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_points())
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "centi-points convert to points by a single division"
)]
fn to_points(centis: u32) -> f64 {
    f64::from(centis) / CENTIS_PER_POINT
}
