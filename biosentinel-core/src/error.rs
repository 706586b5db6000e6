//! Validation errors raised while constructing feature sets.
#![forbid(unsafe_code)]

use thiserror::Error;

/// A feature set was malformed and cannot be scored.
///
/// Raised at construction (and JSON decoding) time so that scoring itself
/// never observes invalid input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// A numeric signal was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A bounded signal fell outside its permitted range.
    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// A count was negative or too large to represent.
    #[error("{field} must be a non-negative count no larger than {} (got {value})", u32::MAX)]
    InvalidCount {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: i64,
    },
    /// An image classifier returned no predictions.
    #[error("classifier predictions must not be empty")]
    EmptyPredictions,
    /// A raster's byte length does not match its dimensions.
    #[error("raster of {width}x{height} RGB pixels needs {expected} bytes (got {actual})")]
    RasterDimensions {
        /// Raster width in pixels.
        width: u32,
        /// Raster height in pixels.
        height: u32,
        /// Byte length implied by the dimensions.
        expected: u64,
        /// Byte length supplied.
        actual: u64,
    },
    /// A raster has no pixels.
    #[error("raster must contain at least one pixel")]
    EmptyRaster,
    /// A bounding box is inverted or lies outside valid coordinates.
    #[error("invalid bounding box: {reason}")]
    InvalidBoundingBox {
        /// Description of the violated constraint.
        reason: &'static str,
    },
    /// A risk tier name was not recognised.
    #[error("unknown risk tier '{name}'")]
    UnknownTier {
        /// Name supplied by the caller.
        name: String,
    },
}
