//! Domain scorers for biodiversity risk and image authenticity.
//!
//! Three pipelines share the rule engine from `biosentinel_core`:
//! - **Observations** combine endangerment, sighting trends and human
//!   proximity into a tiered risk score ([`ObservationScorer`]).
//! - **Satellite areas** combine fire hotspots and vegetation index
//!   ([`SatelliteScorer`]).
//! - **Images** are gated on classifier output and pixel statistics
//!   ([`ImageScorer`]).
//!
//! Two further assessments sit beside them. [`WaterScorer`] grades river
//! water from a photograph and station readings, and [`IucnCategory`] maps
//! Red List statuses onto map colour bands.
//!
//! Feature collaborators (occurrence databases, satellite feeds, image
//! classifiers) are traits; [`resolve_observation_features`] and
//! [`resolve_satellite_features`] apply the fallback policy used when they
//! fail. [`ObservationAlert::derive`] turns risky observations into alert
//! records.
//!
//! # Examples
//!
//! ```
//! use biosentinel_core::{RiskScorer, RiskTier};
//! use biosentinel_scorer::{SatelliteFeatures, SatelliteScorer};
//!
//! let features = SatelliteFeatures::new(Some(35), Some(0.35), None).expect("valid features");
//! let result = SatelliteScorer::default().score(&features);
//! assert_eq!(result.tier, RiskTier::High);
//! assert_eq!(result.reasons, ["Elevated fire activity", "Reduced vegetation index"]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod alert;
mod conservation;
mod endangered;
mod error;
mod image;
mod observation;
mod satellite;
mod sources;
mod water;

#[doc(hidden)]
pub mod test_support;

pub use alert::{Coordinates, ObservationAlert};
pub use conservation::{ConservationRisk, IucnCategory, RiskBreakdown};
pub use endangered::EndangeredRegistry;
pub use error::{ImageAnalysisError, SourceError};
pub use image::{
    AiDetection, AiVerdict, ClassifierHandle, ImageAssessment, ImageClassifier, ImageFeatures,
    ImageScorer, ImageThresholds, OverallAssessment, PixelAnalysis, PixelStatistics, Prediction,
    RgbRaster,
};
pub use observation::{
    ObservationDetails, ObservationFeatures, ObservationResult, ObservationScorer,
    ObservationSignals, observation_rules,
};
pub use satellite::{
    BoundingBox, Layer, LayerReadings, SatelliteDetails, SatelliteFeatures, SatelliteResult,
    SatelliteScorer, satellite_rules,
};
pub use sources::{
    DEFAULT_RADIUS_KM, FALLBACK_BASELINE, HISTORICAL_LIMIT, HISTORICAL_OFFSET_DAYS,
    OccurrenceQuery, OccurrenceSource, OccurrenceWindow, ObservationSite, RECENT_LIMIT,
    SatelliteSource, resolve_observation_features, resolve_satellite_features,
};
pub use water::{
    DominantColor, ImageBreakdown, StationBreakdown, StationReadings, WaterAssessment,
    WaterBreakdown, WaterFeatures, WaterScorer, WaterSignals, WaterStatus, foam_rules,
    water_color_rules,
};
