//! Facade crate for the BioSentinel risk engine.
//!
//! This crate re-exports the scoring primitives and the domain scorers for
//! species observations, satellite areas, uploaded images and river water
//! quality, plus the IUCN colour bands used on buffer-zone maps.
//!
//! ```
//! use biosentinel_engine::{ObservationFeatures, ObservationScorer, RiskScorer, RiskTier};
//!
//! let features = ObservationFeatures::new(10, 100, false, 0.2).expect("valid features");
//! let result = ObservationScorer::default().score(&features);
//! assert_eq!(result.tier, RiskTier::AtRisk);
//! ```

#![forbid(unsafe_code)]

pub use biosentinel_core::{
    InputError, RiskScorer, RiskTier, Score, ScoringResult, Weight, trend_ratio,
};

pub use biosentinel_scorer::{
    BoundingBox, ClassifierHandle, ConservationRisk, Coordinates, DominantColor,
    EndangeredRegistry, ImageAnalysisError, IucnCategory, RiskBreakdown, StationReadings,
    WaterAssessment, WaterFeatures, WaterScorer, WaterStatus,
    ImageAssessment, ImageClassifier, ImageFeatures, ImageScorer, ImageThresholds, Layer,
    ObservationAlert, ObservationFeatures, ObservationResult, ObservationScorer, ObservationSite,
    OccurrenceSource, PixelStatistics, Prediction, RgbRaster, SatelliteFeatures, SatelliteResult,
    SatelliteScorer, SatelliteSource, SourceError, resolve_observation_features,
    resolve_satellite_features,
};
