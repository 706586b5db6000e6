//! In-memory collaborators for tests and examples.

#![forbid(unsafe_code)]

use std::sync::{Mutex, PoisonError};

use crate::{
    BoundingBox, ImageClassifier, Layer, LayerReadings, OccurrenceQuery, OccurrenceSource,
    OccurrenceWindow, Prediction, RgbRaster, SatelliteSource, SourceError,
};

/// Occurrence source answering each window with a fixed outcome.
#[derive(Debug)]
pub struct FixedOccurrences {
    recent: Result<u32, SourceError>,
    historical: Result<u32, SourceError>,
    seen: Mutex<Vec<(u32, OccurrenceWindow)>>,
}

impl FixedOccurrences {
    /// Answer recent and historical queries with the given outcomes.
    #[must_use]
    pub const fn new(recent: Result<u32, SourceError>, historical: Result<u32, SourceError>) -> Self {
        Self {
            recent,
            historical,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// A representative outage.
    #[must_use]
    pub fn outage() -> SourceError {
        SourceError::Unavailable {
            collaborator: "occurrence database",
            message: "connection refused".to_owned(),
        }
    }

    /// Limits and windows of the queries received so far.
    #[must_use]
    pub fn seen(&self) -> Vec<(u32, OccurrenceWindow)> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OccurrenceSource for FixedOccurrences {
    fn count(&self, query: &OccurrenceQuery<'_>) -> Result<u32, SourceError> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((query.limit, query.window));
        match query.window {
            OccurrenceWindow::Recent => self.recent.clone(),
            OccurrenceWindow::Historical { .. } => self.historical.clone(),
        }
    }
}

/// Satellite source returning one fixed outcome.
#[derive(Debug)]
pub struct FixedSatellite {
    outcome: Result<LayerReadings, SourceError>,
}

impl FixedSatellite {
    /// Always answer with `outcome`.
    #[must_use]
    pub const fn new(outcome: Result<LayerReadings, SourceError>) -> Self {
        Self { outcome }
    }
}

impl SatelliteSource for FixedSatellite {
    fn layers(&self, _area: &BoundingBox, _layers: &[Layer]) -> Result<LayerReadings, SourceError> {
        self.outcome.clone()
    }
}

/// Classifier returning fixed predictions, or a fixed failure.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    outcome: Result<Vec<Prediction>, SourceError>,
}

impl FixedClassifier {
    /// Always predict `predictions`.
    #[must_use]
    pub const fn new(predictions: Vec<Prediction>) -> Self {
        Self {
            outcome: Ok(predictions),
        }
    }

    /// Always fail with a malformed-output error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            outcome: Err(SourceError::Malformed {
                collaborator: "image classifier",
                message: "logits had the wrong shape".to_owned(),
            }),
        }
    }
}

impl ImageClassifier for FixedClassifier {
    fn classify(&self, _raster: &RgbRaster) -> Result<Vec<Prediction>, SourceError> {
        self.outcome.clone()
    }
}

/// Build a grey raster from one level per pixel.
///
/// # Errors
/// Returns [`biosentinel_core::InputError`] when `levels` does not hold
/// `width * height` entries.
pub fn grey_raster(
    width: u32,
    height: u32,
    levels: &[u8],
) -> Result<RgbRaster, biosentinel_core::InputError> {
    let pixels = levels.iter().flat_map(|&level| [level; 3]).collect();
    RgbRaster::new(width, height, pixels)
}
