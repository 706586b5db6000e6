//! Image classifier seam and the handle that owns it.

#![forbid(unsafe_code)]

use std::fmt;
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{ImageFeatures, PixelStatistics, RgbRaster};
use crate::{ImageAnalysisError, SourceError};

/// One label emitted by an image classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class label, for example `"ai"` or `"human"`.
    pub label: String,
    /// Probability assigned to the label in `[0, 1]`.
    pub confidence: f64,
}

impl Prediction {
    /// Build a prediction.
    #[must_use]
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Classify a raster as AI-generated or camera-made.
///
/// Implementations wrap a model runtime; the engine only sees the
/// predictions. They must be thread-safe so one handle can serve
/// concurrent requests.
pub trait ImageClassifier: Send + Sync {
    /// Produce one prediction per class.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the model cannot process the raster.
    fn classify(&self, raster: &RgbRaster) -> Result<Vec<Prediction>, SourceError>;
}

/// Explicitly constructed owner of an optional classifier.
///
/// Cloning is cheap and shares the underlying classifier.
///
/// # Examples
/// ```
/// use biosentinel_scorer::{ClassifierHandle, ImageAnalysisError, RgbRaster};
///
/// let handle = ClassifierHandle::unavailable();
/// let raster = RgbRaster::new(1, 1, vec![0, 0, 0]).expect("valid raster");
/// assert_eq!(
///     handle.extract(&raster),
///     Err(ImageAnalysisError::ClassifierUnavailable)
/// );
/// ```
#[derive(Clone, Default)]
pub struct ClassifierHandle {
    classifier: Option<Arc<dyn ImageClassifier>>,
}

impl ClassifierHandle {
    /// Wrap a loaded classifier.
    #[must_use]
    pub fn ready(classifier: impl ImageClassifier + 'static) -> Self {
        Self {
            classifier: Some(Arc::new(classifier)),
        }
    }

    /// A handle with no classifier; extraction always fails.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { classifier: None }
    }

    /// Run `loader` once and keep its classifier.
    ///
    /// A loader failure is logged and yields an unavailable handle.
    #[must_use]
    pub fn initialise<C, F>(loader: F) -> Self
    where
        C: ImageClassifier + 'static,
        F: FnOnce() -> Result<C, SourceError>,
    {
        match loader() {
            Ok(classifier) => {
                info!("image classifier loaded");
                Self::ready(classifier)
            }
            Err(err) => {
                warn!("image classifier failed to load: {err}");
                Self::unavailable()
            }
        }
    }

    /// Report whether a classifier is loaded.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.classifier.is_some()
    }

    /// Classify `raster` and measure its pixels.
    ///
    /// # Errors
    /// Returns [`ImageAnalysisError::ClassifierUnavailable`] without a
    /// classifier, [`ImageAnalysisError::Classifier`] when classification
    /// fails, and [`ImageAnalysisError::InvalidFeatures`] when the
    /// predictions are empty or carry invalid confidences.
    pub fn extract(&self, raster: &RgbRaster) -> Result<ImageFeatures, ImageAnalysisError> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(ImageAnalysisError::ClassifierUnavailable)?;
        let predictions = classifier
            .classify(raster)
            .map_err(ImageAnalysisError::Classifier)?;
        let pixels = PixelStatistics::measure(raster);
        ImageFeatures::from_predictions(&predictions, pixels).map_err(ImageAnalysisError::from)
    }
}

impl fmt::Debug for ClassifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierHandle")
            .field("available", &self.is_available())
            .finish()
    }
}
