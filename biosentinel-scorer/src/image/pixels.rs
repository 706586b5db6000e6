//! Pixel statistics measured on an RGB raster.
//!
//! Each pixel is reduced to a grey level, the mean of its three channels.
//! Grey levels are held as channel sums (`0..=765`) so that distinct levels
//! can be counted exactly; they are scaled back to the `0..=255` range
//! wherever a magnitude is reported.

#![forbid(unsafe_code)]

use std::collections::HashSet;

use biosentinel_core::{InputError, validate};
use serde::{Deserialize, Serialize};

const CHANNELS: u64 = 3;
const EDGE_THRESHOLD: f64 = 50.0;
const STD_SCALE: f64 = 50.0;

/// Row-major, interleaved 8-bit RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbRaster {
    /// Wrap `pixels` as a `width` by `height` raster.
    ///
    /// # Errors
    /// Returns [`InputError::EmptyRaster`] when either dimension is zero and
    /// [`InputError::RasterDimensions`] when the byte length does not equal
    /// `width * height * 3` or the pixel count does not fit in a `u32`.
    ///
    /// # Examples
    /// ```
    /// use biosentinel_scorer::RgbRaster;
    ///
    /// assert!(RgbRaster::new(2, 1, vec![0, 0, 0, 255, 255, 255]).is_ok());
    /// assert!(RgbRaster::new(2, 1, vec![0, 0, 0]).is_err());
    /// ```
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::EmptyRaster);
        }
        let pixel_count = u64::from(width) * u64::from(height);
        let expected = pixel_count * CHANNELS;
        let actual = u64::try_from(pixels.len()).unwrap_or(u64::MAX);
        if actual != expected || u32::try_from(pixel_count).is_err() {
            return Err(InputError::RasterDimensions {
                width,
                height,
                expected,
                actual,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    fn grey_sums(&self) -> GreyPlane {
        let sums = self
            .pixels
            .chunks_exact(3)
            .map(|rgb| rgb.iter().map(|&channel| u16::from(channel)).sum())
            .collect();
        GreyPlane {
            width: self.width,
            height: self.height,
            sums,
        }
    }
}

/// Grey levels stored as channel sums, three times the grey value.
struct GreyPlane {
    width: u32,
    height: u32,
    sums: Vec<u16>,
}

impl GreyPlane {
    fn at(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()?;
        self.sums.get(index).copied()
    }

    fn count(&self) -> u32 {
        u32::try_from(self.sums.len()).unwrap_or(u32::MAX)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "mean and variance of grey levels"
    )]
    fn standard_deviation(&self) -> f64 {
        let n = f64::from(self.count());
        let mean = self.sums.iter().map(|&sum| f64::from(sum)).sum::<f64>() / n;
        let variance = self
            .sums
            .iter()
            .map(|&sum| (f64::from(sum) - mean).powi(2))
            .sum::<f64>()
            / n;
        variance.sqrt() / 3.0
    }

    /// Whether either axis derivative at `(x, y)` exceeds the edge
    /// threshold, in grey levels per pixel.
    #[expect(
        clippy::float_arithmetic,
        reason = "channel sums scale down to grey levels"
    )]
    fn is_edge(&self, x: u32, y: u32, here: u16) -> bool {
        let dx = axis_derivative(
            x.checked_sub(1).and_then(|left| self.at(left, y)),
            here,
            x.checked_add(1).and_then(|right| self.at(right, y)),
        );
        let dy = axis_derivative(
            y.checked_sub(1).and_then(|up| self.at(x, up)),
            here,
            y.checked_add(1).and_then(|down| self.at(x, down)),
        );
        dx.abs() / 3.0 > EDGE_THRESHOLD || dy.abs() / 3.0 > EDGE_THRESHOLD
    }

    fn edge_pixels(&self) -> u32 {
        let mut edges = 0_u32;
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(here) = self.at(x, y) else {
                    continue;
                };
                if self.is_edge(x, y, here) {
                    edges = edges.saturating_add(1);
                }
            }
        }
        edges
    }

    fn distinct_levels(&self) -> u32 {
        let levels: HashSet<u16> = self.sums.iter().copied().collect();
        u32::try_from(levels.len()).unwrap_or(u32::MAX)
    }
}

/// Derivative along one axis: central difference inside the raster,
/// one-sided difference at its borders, zero along a single-pixel axis.
#[expect(
    clippy::float_arithmetic,
    reason = "central differences halve the span"
)]
fn axis_derivative(before: Option<u16>, here: u16, after: Option<u16>) -> f64 {
    match (before, after) {
        (Some(b), Some(a)) => (f64::from(a) - f64::from(b)) / 2.0,
        (None, Some(a)) => f64::from(a) - f64::from(here),
        (Some(b), None) => f64::from(here) - f64::from(b),
        (None, None) => 0.0,
    }
}

/// Summary statistics of a raster's grey levels.
///
/// # Examples
/// ```
/// use biosentinel_scorer::{PixelStatistics, RgbRaster};
///
/// let flat = RgbRaster::new(2, 2, vec![128; 12]).expect("valid raster");
/// let stats = PixelStatistics::measure(&flat);
/// assert_eq!(stats.pixel_std(), 0.0);
/// assert_eq!(stats.unique_colors(), 1);
/// assert_eq!(stats.quality_score(), 0.075);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPixelStatistics")]
pub struct PixelStatistics {
    pixel_std: f64,
    edge_density: f64,
    unique_colors: u32,
    color_ratio: f64,
}

impl PixelStatistics {
    /// Validate statistics supplied by the caller.
    ///
    /// # Errors
    /// Returns [`InputError`] when `pixel_std` is negative or not finite, or
    /// when `edge_density` or `color_ratio` lie outside `[0, 1]`.
    pub fn new(
        pixel_std: f64,
        edge_density: f64,
        unique_colors: u32,
        color_ratio: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            pixel_std: validate::in_range("pixelStd", pixel_std, 0.0, f64::MAX)?,
            edge_density: validate::unit_interval("edgeDensity", edge_density)?,
            unique_colors,
            color_ratio: validate::unit_interval("colorRatio", color_ratio)?,
        })
    }

    /// Measure `raster`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "densities are fractions of the pixel count"
    )]
    pub fn measure(raster: &RgbRaster) -> Self {
        let plane = raster.grey_sums();
        let pixel_count = f64::from(plane.count());
        let unique_colors = plane.distinct_levels();
        Self {
            pixel_std: plane.standard_deviation(),
            edge_density: f64::from(plane.edge_pixels()) / pixel_count,
            unique_colors,
            color_ratio: f64::from(unique_colors) / pixel_count,
        }
    }

    /// Population standard deviation of grey levels.
    #[must_use]
    pub const fn pixel_std(&self) -> f64 {
        self.pixel_std
    }

    /// Fraction of pixels where either axis derivative exceeds 50 grey levels.
    #[must_use]
    pub const fn edge_density(&self) -> f64 {
        self.edge_density
    }

    /// Number of distinct grey levels.
    #[must_use]
    pub const fn unique_colors(&self) -> u32 {
        self.unique_colors
    }

    /// Distinct grey levels per pixel.
    #[must_use]
    pub const fn color_ratio(&self) -> f64 {
        self.color_ratio
    }

    /// Heuristic naturalness in `[0, 1]`; higher looks more like a camera
    /// photograph.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weighted blend of pixel statistics"
    )]
    pub fn quality_score(&self) -> f64 {
        let blend =
            (self.pixel_std / STD_SCALE) * 0.5 + self.edge_density * 2.0 + self.color_ratio * 0.3;
        blend.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPixelStatistics {
    pixel_std: f64,
    edge_density: f64,
    unique_colors: i64,
    color_ratio: f64,
}

impl TryFrom<RawPixelStatistics> for PixelStatistics {
    type Error = InputError;

    fn try_from(raw: RawPixelStatistics) -> Result<Self, Self::Error> {
        Self::new(
            raw.pixel_std,
            raw.edge_density,
            validate::count("uniqueColors", raw.unique_colors)?,
            raw.color_ratio,
        )
    }
}
