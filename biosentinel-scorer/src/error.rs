//! Error types raised by feature collaborators and image analysis.
#![forbid(unsafe_code)]

use biosentinel_core::InputError;
use thiserror::Error;

/// A feature collaborator (occurrence database, satellite feed, image
/// classifier) could not produce data.
///
/// Callers absorb these through documented fallbacks; the scoring engine
/// never sees them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The collaborator could not be reached or is not loaded.
    #[error("{collaborator} is unavailable: {message}")]
    Unavailable {
        /// Name of the collaborator.
        collaborator: &'static str,
        /// Human-readable detail.
        message: String,
    },
    /// The collaborator answered with data that could not be used.
    #[error("{collaborator} returned malformed data: {message}")]
    Malformed {
        /// Name of the collaborator.
        collaborator: &'static str,
        /// Human-readable detail.
        message: String,
    },
}

/// Errors raised while extracting image features.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImageAnalysisError {
    /// No classifier has been initialised.
    #[error("image classifier not available")]
    ClassifierUnavailable,
    /// The classifier failed while processing the image.
    #[error("image classification failed")]
    Classifier(#[source] SourceError),
    /// The classifier output or raster could not form a feature set.
    #[error("image features are invalid")]
    InvalidFeatures(#[from] InputError),
}
