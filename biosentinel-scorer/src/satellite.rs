//! Risk scoring for a satellite area of interest.
//!
//! Fire hotspot counts and vegetation index are independent buckets. A
//! missing layer contributes nothing and is reported as `null`.

#![forbid(unsafe_code)]

use biosentinel_core::{
    Bucket, InputError, Reason, RiskScorer, Rule, RuleTable, ScoringResult, Weight, validate,
};
use serde::{Deserialize, Serialize};

/// Result of scoring an area of interest.
pub type SatelliteResult = ScoringResult<SatelliteDetails>;

/// Validated satellite layers for one area of interest.
///
/// # Examples
/// ```
/// use biosentinel_scorer::SatelliteFeatures;
///
/// let features = SatelliteFeatures::new(Some(60), Some(0.25), None).expect("valid features");
/// assert_eq!(features.fire_hotspots(), Some(60));
/// assert!(SatelliteFeatures::new(None, Some(1.5), None).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSatelliteFeatures")]
pub struct SatelliteFeatures {
    fire_hotspots: Option<u32>,
    vegetation_index: Option<f64>,
    last_update: Option<String>,
}

impl SatelliteFeatures {
    /// Validate and build a feature set.
    ///
    /// # Errors
    /// Returns [`InputError`] when the vegetation index is not finite or
    /// lies outside `[0, 1]`.
    pub fn new(
        fire_hotspots: Option<u32>,
        vegetation_index: Option<f64>,
        last_update: Option<String>,
    ) -> Result<Self, InputError> {
        let vegetation = vegetation_index
            .map(|index| validate::unit_interval("vegetationIndex", index))
            .transpose()?;
        Ok(Self {
            fire_hotspots,
            vegetation_index: vegetation,
            last_update,
        })
    }

    /// Active fire hotspots, when the fire layer was requested.
    #[must_use]
    pub const fn fire_hotspots(&self) -> Option<u32> {
        self.fire_hotspots
    }

    /// Vegetation index in `[0, 1]`, when the vegetation layer was requested.
    #[must_use]
    pub const fn vegetation_index(&self) -> Option<f64> {
        self.vegetation_index
    }

    /// Timestamp supplied by the data source.
    #[must_use]
    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSatelliteFeatures {
    #[serde(default, alias = "fireHotspots")]
    fire_hotspot_count: Option<i64>,
    #[serde(default)]
    vegetation_index: Option<f64>,
    #[serde(default)]
    last_update: Option<String>,
}

impl TryFrom<RawSatelliteFeatures> for SatelliteFeatures {
    type Error = InputError;

    fn try_from(raw: RawSatelliteFeatures) -> Result<Self, Self::Error> {
        let hotspots = raw
            .fire_hotspot_count
            .map(|count| validate::count("fireHotspotCount", count))
            .transpose()?;
        Self::new(hotspots, raw.vegetation_index, raw.last_update)
    }
}

/// Satellite-specific fields reported alongside the score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteDetails {
    /// Fire hotspot count, `null` when the layer is absent.
    pub fire_hotspots: Option<u32>,
    /// Vegetation index, `null` when the layer is absent.
    pub vegetation_index: Option<f64>,
    /// Source timestamp, `null` when unknown.
    pub last_update: Option<String>,
}

/// Build the default satellite rule table.
#[must_use]
pub fn satellite_rules() -> RuleTable<SatelliteFeatures> {
    RuleTable::new()
        .with_bucket(
            Bucket::new("fire")
                .with_rule(Rule::new(
                    Weight::from_centis(200),
                    |f: &SatelliteFeatures| f.fire_hotspots.is_some_and(|count| count > 50),
                    Reason::Fixed("High fire activity"),
                ))
                .with_rule(Rule::new(
                    Weight::from_centis(100),
                    |f: &SatelliteFeatures| f.fire_hotspots.is_some_and(|count| count > 20),
                    Reason::Fixed("Elevated fire activity"),
                )),
        )
        .with_bucket(
            Bucket::new("vegetation")
                .with_rule(Rule::new(
                    Weight::from_centis(150),
                    |f: &SatelliteFeatures| f.vegetation_index.is_some_and(|index| index < 0.3),
                    Reason::Fixed("Low vegetation index"),
                ))
                .with_rule(Rule::new(
                    Weight::from_centis(100),
                    |f: &SatelliteFeatures| f.vegetation_index.is_some_and(|index| index < 0.4),
                    Reason::Fixed("Reduced vegetation index"),
                )),
        )
}

/// Score areas of interest with a rule table.
#[derive(Debug)]
pub struct SatelliteScorer {
    rules: RuleTable<SatelliteFeatures>,
}

impl SatelliteScorer {
    /// Use a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: RuleTable<SatelliteFeatures>) -> Self {
        Self { rules }
    }
}

impl Default for SatelliteScorer {
    fn default() -> Self {
        Self::with_rules(satellite_rules())
    }
}

impl RiskScorer for SatelliteScorer {
    type Features = SatelliteFeatures;
    type Output = SatelliteResult;

    fn score(&self, features: &SatelliteFeatures) -> SatelliteResult {
        let accumulator = self.rules.evaluate(features);
        ScoringResult::assemble(
            accumulator,
            SatelliteDetails {
                fire_hotspots: features.fire_hotspots,
                vegetation_index: features.vegetation_index,
                last_update: features.last_update.clone(),
            },
        )
    }
}

/// Geographic area of interest in decimal degrees.
///
/// # Examples
/// ```
/// use biosentinel_scorer::BoundingBox;
///
/// assert!(BoundingBox::new(-10.0, 10.0, 30.0, 40.0).is_ok());
/// assert!(BoundingBox::new(10.0, -10.0, 30.0, 40.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBoundingBox")]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// Validate and build a bounding box.
    ///
    /// # Errors
    /// Returns [`InputError`] when a coordinate is not finite, lies outside
    /// valid latitude or longitude, or when a minimum exceeds its maximum.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, InputError> {
        let south = validate::in_range("minLat", min_lat, -90.0, 90.0)?;
        let north = validate::in_range("maxLat", max_lat, -90.0, 90.0)?;
        let west = validate::in_range("minLon", min_lon, -180.0, 180.0)?;
        let east = validate::in_range("maxLon", max_lon, -180.0, 180.0)?;
        if south > north {
            return Err(InputError::InvalidBoundingBox {
                reason: "minLat exceeds maxLat",
            });
        }
        if west > east {
            return Err(InputError::InvalidBoundingBox {
                reason: "minLon exceeds maxLon",
            });
        }
        Ok(Self {
            min_lat: south,
            max_lat: north,
            min_lon: west,
            max_lon: east,
        })
    }

    /// Southern edge.
    #[must_use]
    pub const fn min_lat(&self) -> f64 {
        self.min_lat
    }

    /// Northern edge.
    #[must_use]
    pub const fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Western edge.
    #[must_use]
    pub const fn min_lon(&self) -> f64 {
        self.min_lon
    }

    /// Eastern edge.
    #[must_use]
    pub const fn max_lon(&self) -> f64 {
        self.max_lon
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = InputError;

    fn try_from(raw: RawBoundingBox) -> Result<Self, Self::Error> {
        Self::new(raw.min_lat, raw.max_lat, raw.min_lon, raw.max_lon)
    }
}

/// A satellite data layer that can be requested for an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Active fire hotspots.
    Fire,
    /// Vegetation index.
    Vegetation,
}

/// Raw readings returned by a satellite source.
///
/// Values are unvalidated; resolution clamps and filters them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerReadings {
    /// Fire hotspot count, if measured.
    pub fire_hotspots: Option<u32>,
    /// Vegetation index, if measured.
    pub vegetation_index: Option<f64>,
    /// Source timestamp.
    pub last_update: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosentinel_core::RiskTier;
    use rstest::rstest;

    fn score(hotspots: Option<u32>, vegetation: Option<f64>) -> SatelliteResult {
        let features = SatelliteFeatures::new(hotspots, vegetation, None).expect("valid features");
        SatelliteScorer::default().score(&features)
    }

    #[rstest]
    fn heavy_fire_and_sparse_vegetation_is_critical() {
        let result = score(Some(51), Some(0.29));
        assert_eq!(result.total, 3.5);
        assert_eq!(result.tier, RiskTier::Critical);
        assert_eq!(result.reasons, ["High fire activity", "Low vegetation index"]);
    }

    #[rstest]
    #[case(Some(20), None, 0)]
    #[case(Some(21), None, 100)]
    #[case(Some(50), None, 100)]
    #[case(Some(51), None, 200)]
    #[case(None, Some(0.4), 0)]
    #[case(None, Some(0.3), 100)]
    #[case(None, Some(0.0), 150)]
    fn layer_thresholds(#[case] hotspots: Option<u32>, #[case] vegetation: Option<f64>, #[case] centis: u32) {
        let features = SatelliteFeatures::new(hotspots, vegetation, None).expect("valid features");
        assert_eq!(satellite_rules().evaluate(&features).total().centis(), centis);
    }

    #[rstest]
    fn missing_layers_score_zero_and_serialise_null() {
        let result = score(None, None);
        assert_eq!(result.total, 0.0);
        assert_eq!(result.tier, RiskTier::Positive);
        let value = serde_json::to_value(&result).expect("serialise result");
        assert!(value["fireHotspots"].is_null());
        assert!(value["vegetationIndex"].is_null());
        assert!(value["lastUpdate"].is_null());
    }

    #[rstest]
    fn decodes_either_hotspot_field_name() {
        let long: SatelliteFeatures =
            serde_json::from_str(r#"{"fireHotspotCount":30}"#).expect("decode long name");
        let short: SatelliteFeatures =
            serde_json::from_str(r#"{"fireHotspots":30,"lastUpdate":"2025-01-01T00:00:00"}"#)
                .expect("decode short name");
        assert_eq!(long.fire_hotspots(), Some(30));
        assert_eq!(short.fire_hotspots(), Some(30));
        assert_eq!(short.last_update(), Some("2025-01-01T00:00:00"));
    }

    #[rstest]
    #[case(r#"{"fireHotspotCount":-3}"#)]
    #[case(r#"{"vegetationIndex":1.01}"#)]
    fn rejects_invalid_json(#[case] json: &str) {
        assert!(serde_json::from_str::<SatelliteFeatures>(json).is_err());
    }

    #[rstest]
    #[case(91.0, 92.0, 0.0, 1.0)]
    #[case(0.0, 1.0, -181.0, 0.0)]
    #[case(0.0, 1.0, 5.0, 4.0)]
    #[case(f64::NAN, 1.0, 0.0, 1.0)]
    fn rejects_invalid_bounding_boxes(#[case] a: f64, #[case] b: f64, #[case] c: f64, #[case] d: f64) {
        assert!(BoundingBox::new(a, b, c, d).is_err());
    }

    #[rstest]
    fn decodes_bounding_box_and_layers() {
        let bbox: BoundingBox =
            serde_json::from_str(r#"{"minLat":-5,"maxLat":5,"minLon":100,"maxLon":110}"#)
                .expect("decode bounding box");
        assert_eq!(bbox.max_lon(), 110.0);
        let layers: Vec<Layer> =
            serde_json::from_str(r#"["fire","vegetation"]"#).expect("decode layers");
        assert_eq!(layers, [Layer::Fire, Layer::Vegetation]);
    }
}
