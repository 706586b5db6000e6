//! River water quality from a photograph and monitoring-station readings.
//!
//! The photograph contributes three 0-100 sub-scores (colour, clarity and
//! surface texture); the station contributes dissolved oxygen, biochemical
//! oxygen demand and faecal coliform sub-scores. Higher is cleaner. The two
//! halves are averaged with equal weight and the result is bucketed into a
//! [`WaterStatus`].
//!
//! Colour penalties and surface-texture scores are rule tables, so their
//! reasons surface in the assessment in the order the buckets fire.
//!
//! # Examples
//! ```
//! use biosentinel_core::RiskScorer;
//! use biosentinel_scorer::{DominantColor, StationReadings, WaterFeatures, WaterScorer, WaterStatus};
//!
//! let color = DominantColor::new(100.0, 150.0, 200.0).expect("valid colour");
//! let features = WaterFeatures::new(color, 20.0, StationReadings::default()).expect("valid features");
//! let assessment = WaterScorer::default().score(&features);
//! assert_eq!(assessment.status, WaterStatus::Good);
//! assert_eq!(assessment.score, 88.0);
//! ```

#![forbid(unsafe_code)]

use biosentinel_core::{
    Bucket, InputError, Reason, RiskScorer, Rule, RuleTable, Weight, round_to, validate,
};
use serde::{Deserialize, Serialize};

use crate::RgbRaster;

const MAX_SUB_SCORE: f64 = 100.0;
const MAX_CHANNEL: f64 = 255.0;
const RATIO_EPSILON: f64 = 0.001;

/// Mean colour of a water photograph, per channel in `0..=255`.
///
/// # Examples
/// ```
/// use biosentinel_scorer::DominantColor;
///
/// assert!(DominantColor::new(90.0, 180.0, 100.0).is_ok());
/// assert!(DominantColor::new(256.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDominantColor")]
pub struct DominantColor {
    #[serde(rename = "r")]
    red: f64,
    #[serde(rename = "g")]
    green: f64,
    #[serde(rename = "b")]
    blue: f64,
}

impl DominantColor {
    /// Validate and build a colour.
    ///
    /// # Errors
    /// Returns [`InputError`] when a channel is not finite or lies outside
    /// `[0, 255]`.
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, InputError> {
        Ok(Self {
            red: validate::in_range("r", red, 0.0, MAX_CHANNEL)?,
            green: validate::in_range("g", green, 0.0, MAX_CHANNEL)?,
            blue: validate::in_range("b", blue, 0.0, MAX_CHANNEL)?,
        })
    }

    /// Red channel.
    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Green channel.
    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }
}

#[derive(Debug, Deserialize)]
struct RawDominantColor {
    r: f64,
    g: f64,
    b: f64,
}

impl TryFrom<RawDominantColor> for DominantColor {
    type Error = InputError;

    fn try_from(raw: RawDominantColor) -> Result<Self, Self::Error> {
        Self::new(raw.r, raw.g, raw.b)
    }
}

/// Chemical readings from the monitoring station nearest the photograph.
///
/// The default is the reading used when no station data is available.
///
/// # Examples
/// ```
/// use biosentinel_scorer::StationReadings;
///
/// let readings = StationReadings::new(8.2, 2.1, 1200.0, 7.4).expect("valid readings");
/// assert_eq!(readings.dissolved_oxygen(), 8.2);
/// assert!(StationReadings::new(8.2, 2.1, 1200.0, 14.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStationReadings")]
pub struct StationReadings {
    #[serde(rename = "do")]
    dissolved_oxygen: f64,
    #[serde(rename = "bod")]
    biochemical_oxygen_demand: f64,
    coliform: f64,
    ph: f64,
}

impl StationReadings {
    /// Validate and build station readings.
    ///
    /// # Errors
    /// Returns [`InputError`] when a reading is not finite or negative, or
    /// when `ph` lies outside `[0, 14]`.
    pub fn new(
        dissolved_oxygen: f64,
        biochemical_oxygen_demand: f64,
        coliform: f64,
        ph: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            dissolved_oxygen: validate::in_range("do", dissolved_oxygen, 0.0, f64::MAX)?,
            biochemical_oxygen_demand: validate::in_range(
                "bod",
                biochemical_oxygen_demand,
                0.0,
                f64::MAX,
            )?,
            coliform: validate::in_range("coliform", coliform, 0.0, f64::MAX)?,
            ph: validate::in_range("ph", ph, 0.0, 14.0)?,
        })
    }

    /// Dissolved oxygen in mg/L.
    #[must_use]
    pub const fn dissolved_oxygen(&self) -> f64 {
        self.dissolved_oxygen
    }

    /// Biochemical oxygen demand in mg/L.
    #[must_use]
    pub const fn biochemical_oxygen_demand(&self) -> f64 {
        self.biochemical_oxygen_demand
    }

    /// Faecal coliform in MPN/100 mL.
    #[must_use]
    pub const fn coliform(&self) -> f64 {
        self.coliform
    }

    /// Acidity.
    #[must_use]
    pub const fn ph(&self) -> f64 {
        self.ph
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "readings scale onto 0-100 against bathing-water limits"
    )]
    fn sub_scores(&self) -> (f64, f64, f64) {
        let oxygen = (self.dissolved_oxygen * 10.0).min(MAX_SUB_SCORE);
        let demand = (500.0 / self.biochemical_oxygen_demand.max(0.1)).min(MAX_SUB_SCORE);
        let coliform = (500_000.0 / self.coliform.max(100.0)).min(MAX_SUB_SCORE);
        (oxygen, demand, coliform)
    }
}

impl Default for StationReadings {
    fn default() -> Self {
        Self {
            dissolved_oxygen: 7.0,
            biochemical_oxygen_demand: 3.0,
            coliform: 5000.0,
            ph: 7.3,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawStationReadings {
    #[serde(rename = "do")]
    dissolved_oxygen: f64,
    bod: f64,
    coliform: f64,
    ph: f64,
}

impl TryFrom<RawStationReadings> for StationReadings {
    type Error = InputError;

    fn try_from(raw: RawStationReadings) -> Result<Self, Self::Error> {
        Self::new(raw.dissolved_oxygen, raw.bod, raw.coliform, raw.ph)
    }
}

/// Validated inputs for one water-quality assessment.
///
/// `station` defaults to [`StationReadings::default`] when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWaterFeatures")]
pub struct WaterFeatures {
    dominant_color: DominantColor,
    color_variance: f64,
    station: StationReadings,
}

impl WaterFeatures {
    /// Validate and build a feature set.
    ///
    /// # Errors
    /// Returns [`InputError`] when `color_variance` is negative or not
    /// finite.
    pub fn new(
        dominant_color: DominantColor,
        color_variance: f64,
        station: StationReadings,
    ) -> Result<Self, InputError> {
        Ok(Self {
            dominant_color,
            color_variance: validate::in_range("colorVariance", color_variance, 0.0, f64::MAX)?,
            station,
        })
    }

    /// Measure the mean colour and channel spread of `raster`.
    ///
    /// Both are rounded to whole channel levels. The spread is the
    /// population standard deviation of each channel, averaged over the
    /// three channels.
    ///
    /// # Examples
    /// ```
    /// use biosentinel_scorer::{RgbRaster, StationReadings, WaterFeatures};
    ///
    /// let raster = RgbRaster::new(2, 1, vec![0, 100, 200, 0, 100, 200]).expect("valid raster");
    /// let features = WaterFeatures::measure(&raster, StationReadings::default());
    /// assert_eq!(features.dominant_color().green(), 100.0);
    /// assert_eq!(features.color_variance(), 0.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "channel means and standard deviations"
    )]
    pub fn measure(raster: &RgbRaster, station: StationReadings) -> Self {
        let mut sums = [0.0_f64; 3];
        let mut squares = [0.0_f64; 3];
        for rgb in raster.as_bytes().chunks_exact(3) {
            for ((sum, square), &channel) in sums.iter_mut().zip(squares.iter_mut()).zip(rgb) {
                let level = f64::from(channel);
                *sum += level;
                *square += level * level;
            }
        }
        let pixel_count = f64::from(raster.width()) * f64::from(raster.height());
        let means = sums.map(|sum| sum / pixel_count);
        let spread = means
            .iter()
            .zip(squares)
            .map(|(mean, square)| (square / pixel_count - mean * mean).max(0.0).sqrt())
            .sum::<f64>()
            / 3.0;
        let [red, green, blue] = means.map(|mean| round_to(mean, 0));
        Self {
            dominant_color: DominantColor { red, green, blue },
            color_variance: round_to(spread, 0),
            station,
        }
    }

    /// Mean colour of the photograph.
    #[must_use]
    pub const fn dominant_color(&self) -> DominantColor {
        self.dominant_color
    }

    /// Channel spread of the photograph, in channel levels.
    #[must_use]
    pub const fn color_variance(&self) -> f64 {
        self.color_variance
    }

    /// Readings from the nearest station.
    #[must_use]
    pub const fn station(&self) -> StationReadings {
        self.station
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWaterFeatures {
    dominant_color: DominantColor,
    color_variance: f64,
    #[serde(default)]
    station: Option<StationReadings>,
}

impl TryFrom<RawWaterFeatures> for WaterFeatures {
    type Error = InputError;

    fn try_from(raw: RawWaterFeatures) -> Result<Self, Self::Error> {
        Self::new(
            raw.dominant_color,
            raw.color_variance,
            raw.station.unwrap_or_default(),
        )
    }
}

/// Derived signals the water rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterSignals {
    /// Red plus blue over twice the green; high for brown or grey water.
    pub brown_ratio: f64,
    /// Green share of the summed channels.
    pub green_ratio: f64,
    /// Unweighted mean of the three channels.
    pub brightness: f64,
    /// Channel spread of the photograph.
    pub color_variance: f64,
}

impl From<&WaterFeatures> for WaterSignals {
    #[expect(
        clippy::float_arithmetic,
        reason = "colour ratios over channel means"
    )]
    fn from(features: &WaterFeatures) -> Self {
        let DominantColor { red, green, blue } = features.dominant_color;
        let total = red + green + blue;
        Self {
            brown_ratio: (red + blue) / (2.0 * green + RATIO_EPSILON),
            green_ratio: green / (total + RATIO_EPSILON),
            brightness: total / 3.0,
            color_variance: features.color_variance,
        }
    }
}

/// Build the default colour penalty table.
///
/// Weights are penalty points taken off a perfect colour score of 100.
#[must_use]
pub fn water_color_rules() -> RuleTable<WaterSignals> {
    RuleTable::new()
        .with_bucket(
            Bucket::new("discolouration")
                .with_rule(Rule::new(
                    Weight::from_centis(3000),
                    |s: &WaterSignals| s.brown_ratio > 1.2,
                    Reason::Fixed("Brown or grey discolouration"),
                ))
                .with_rule(Rule::new(
                    Weight::from_centis(1500),
                    |s: &WaterSignals| s.brown_ratio > 1.0,
                    Reason::Fixed("Slight brown discolouration"),
                )),
        )
        .with_bucket(Bucket::new("darkness").with_rule(Rule::new(
            Weight::from_centis(2000),
            |s: &WaterSignals| s.brightness < 50.0,
            Reason::Fixed("Very dark water"),
        )))
        .with_bucket(Bucket::new("algae").with_rule(Rule::new(
            Weight::from_centis(1500),
            |s: &WaterSignals| s.green_ratio > 0.4 && s.brightness > 100.0,
            Reason::Fixed("Possible algae bloom"),
        )))
}

/// Build the default foam and debris table.
///
/// Weights are the foam score in points; higher means more surface
/// disturbance.
#[must_use]
pub fn foam_rules() -> RuleTable<WaterSignals> {
    RuleTable::new().with_bucket(
        Bucket::new("foam")
            .with_rule(Rule::new(
                Weight::from_centis(8500),
                |s: &WaterSignals| s.color_variance > 60.0,
                Reason::Fixed("Heavy foam or debris"),
            ))
            .with_rule(Rule::new(
                Weight::from_centis(4500),
                |s: &WaterSignals| s.color_variance > 40.0,
                Reason::Fixed("Foam or debris patches"),
            ))
            .with_rule(Rule::new(
                Weight::from_centis(1500),
                |s: &WaterSignals| s.color_variance > 25.0,
                Reason::Fixed("Uneven water surface"),
            )),
    )
}

/// Overall water condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterStatus {
    /// Score of at least 70.
    Good,
    /// Score of at least 40.
    Average,
    /// Anything lower.
    Poor,
}

impl WaterStatus {
    /// Bucket an overall score.
    ///
    /// # Examples
    /// ```
    /// use biosentinel_scorer::WaterStatus;
    ///
    /// assert_eq!(WaterStatus::from_score(70.0), WaterStatus::Good);
    /// assert_eq!(WaterStatus::from_score(39.9), WaterStatus::Poor);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }
}

/// Photograph sub-scores, each rounded to a whole point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBreakdown {
    /// Colour score after penalties.
    pub color_score: f64,
    /// Clarity; 100 minus the turbidity estimate.
    pub turbidity_score: f64,
    /// Surface cleanliness; 100 minus the foam score.
    pub foam_algae_score: f64,
    /// Mean of the three.
    pub average: f64,
}

/// Station readings and their combined sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationBreakdown {
    /// Dissolved oxygen as supplied.
    #[serde(rename = "do")]
    pub dissolved_oxygen: f64,
    /// Biochemical oxygen demand as supplied.
    pub bod: f64,
    /// Faecal coliform as supplied.
    pub coliform: f64,
    /// Acidity as supplied; not scored.
    pub ph: f64,
    /// Mean of the oxygen, demand and coliform sub-scores, rounded.
    pub score: f64,
}

/// Both halves of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterBreakdown {
    /// Photograph half.
    pub image: ImageBreakdown,
    /// Station half.
    pub cpcb: StationBreakdown,
}

/// Outcome of a water-quality assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAssessment {
    /// Condition bucket of the unrounded score.
    pub status: WaterStatus,
    /// Overall score in `0..=100`, rounded to a whole point.
    pub score: f64,
    /// Colour and surface findings in firing order.
    pub reasons: Vec<String>,
    /// Sub-scores behind the overall score.
    pub breakdown: WaterBreakdown,
}

/// Assess water quality with colour and foam rule tables.
#[derive(Debug)]
pub struct WaterScorer {
    color_rules: RuleTable<WaterSignals>,
    foam_rules: RuleTable<WaterSignals>,
}

impl WaterScorer {
    /// Use custom colour penalty and foam tables.
    #[must_use]
    pub const fn with_rules(
        color_rules: RuleTable<WaterSignals>,
        foam_rules: RuleTable<WaterSignals>,
    ) -> Self {
        Self {
            color_rules,
            foam_rules,
        }
    }
}

impl Default for WaterScorer {
    fn default() -> Self {
        Self::with_rules(water_color_rules(), foam_rules())
    }
}

impl RiskScorer for WaterScorer {
    type Features = WaterFeatures;
    type Output = WaterAssessment;

    #[expect(
        clippy::float_arithmetic,
        reason = "sub-scores are inverted and averaged"
    )]
    fn score(&self, features: &WaterFeatures) -> WaterAssessment {
        let signals = WaterSignals::from(features);
        let (penalty, mut reasons) = self.color_rules.evaluate(&signals).into_parts();
        let (foam, foam_reasons) = self.foam_rules.evaluate(&signals).into_parts();
        reasons.extend(foam_reasons);

        let color_score = (MAX_SUB_SCORE - penalty.as_points()).clamp(0.0, MAX_SUB_SCORE);
        let turbidity = (features.color_variance * 2.0).min(MAX_SUB_SCORE);
        let clarity = MAX_SUB_SCORE - turbidity;
        let surface = MAX_SUB_SCORE - foam.as_points().min(MAX_SUB_SCORE);
        let image_average = (color_score + clarity + surface) / 3.0;

        let (oxygen, demand, coliform) = features.station.sub_scores();
        let station_average = (oxygen + demand + coliform) / 3.0;

        let overall = image_average * 0.5 + station_average * 0.5;
        let station = features.station;
        WaterAssessment {
            status: WaterStatus::from_score(overall),
            score: round_to(overall, 0),
            reasons,
            breakdown: WaterBreakdown {
                image: ImageBreakdown {
                    color_score: round_to(color_score, 0),
                    turbidity_score: round_to(clarity, 0),
                    foam_algae_score: round_to(surface, 0),
                    average: round_to(image_average, 0),
                },
                cpcb: StationBreakdown {
                    dissolved_oxygen: station.dissolved_oxygen,
                    bod: station.biochemical_oxygen_demand,
                    coliform: station.coliform,
                    ph: station.ph,
                    score: round_to(station_average, 0),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use rstest::rstest;

    fn features(color: (f64, f64, f64), variance: f64, station: StationReadings) -> WaterFeatures {
        let (red, green, blue) = color;
        let dominant = DominantColor::new(red, green, blue).expect("valid colour");
        WaterFeatures::new(dominant, variance, station).expect("valid features")
    }

    fn readings(oxygen: f64, demand: f64, coliform: f64) -> StationReadings {
        StationReadings::new(oxygen, demand, coliform, 7.1).expect("valid readings")
    }

    #[rstest]
    fn clear_blue_water_is_good() {
        let assessment = WaterScorer::default().score(&features(
            (100.0, 150.0, 200.0),
            20.0,
            StationReadings::default(),
        ));
        assert_eq!(assessment.status, WaterStatus::Good);
        assert_eq!(assessment.score, 88.0);
        assert!(assessment.reasons.is_empty());
        assert_eq!(
            assessment.breakdown.image,
            ImageBreakdown {
                color_score: 100.0,
                turbidity_score: 60.0,
                foam_algae_score: 100.0,
                average: 87.0,
            }
        );
        assert_eq!(assessment.breakdown.cpcb.score, 90.0);
    }

    #[rstest]
    fn brown_foamy_water_near_a_polluted_station_is_average() {
        let assessment = WaterScorer::default().score(&features(
            (150.0, 100.0, 80.0),
            65.0,
            readings(5.8, 4.5, 12_000.0),
        ));
        assert_eq!(assessment.status, WaterStatus::Average);
        assert_eq!(assessment.score, 50.0);
        assert_eq!(
            assessment.reasons,
            ["Slight brown discolouration", "Heavy foam or debris"]
        );
        assert_eq!(assessment.breakdown.image.color_score, 85.0);
        assert_eq!(assessment.breakdown.image.turbidity_score, 0.0);
        assert_eq!(assessment.breakdown.image.foam_algae_score, 15.0);
        assert_eq!(assessment.breakdown.cpcb.score, 67.0);
    }

    #[rstest]
    fn dark_turbid_water_is_poor() {
        let assessment = WaterScorer::default().score(&features(
            (30.0, 35.0, 30.0),
            70.0,
            readings(2.0, 10.0, 50_000.0),
        ));
        assert_eq!(assessment.status, WaterStatus::Poor);
        assert_eq!(assessment.score, 29.0);
        assert_eq!(assessment.reasons, ["Very dark water", "Heavy foam or debris"]);
    }

    #[rstest]
    #[case((100.0, 150.0, 200.0), 0)]
    #[case((150.0, 100.0, 80.0), 1500)]
    #[case((160.0, 100.0, 120.0), 3000)]
    #[case((90.0, 180.0, 100.0), 1500)]
    #[case((30.0, 35.0, 30.0), 2000)]
    #[case((40.0, 20.0, 40.0), 5000)]
    fn colour_penalties(#[case] color: (f64, f64, f64), #[case] centis: u32) {
        let signals = WaterSignals::from(&features(color, 0.0, StationReadings::default()));
        assert_eq!(water_color_rules().evaluate(&signals).total().centis(), centis);
    }

    #[rstest]
    #[case(25.0, 0)]
    #[case(26.0, 1500)]
    #[case(40.0, 1500)]
    #[case(41.0, 4500)]
    #[case(60.0, 4500)]
    #[case(61.0, 8500)]
    fn foam_scores_step_with_spread(#[case] variance: f64, #[case] centis: u32) {
        let calm = features((100.0, 150.0, 200.0), variance, StationReadings::default());
        let signals = WaterSignals::from(&calm);
        assert_eq!(foam_rules().evaluate(&signals).total().centis(), centis);
    }

    #[rstest]
    #[case(70.0, WaterStatus::Good)]
    #[case(69.99, WaterStatus::Average)]
    #[case(40.0, WaterStatus::Average)]
    #[case(39.99, WaterStatus::Poor)]
    fn status_boundaries(#[case] score: f64, #[case] expected: WaterStatus) {
        assert_eq!(WaterStatus::from_score(score), expected);
    }

    #[rstest]
    fn clean_station_sub_scores_cap_at_one_hundred() {
        let (oxygen, demand, coliform) = readings(12.0, 0.0, 0.0).sub_scores();
        assert_eq!((oxygen, demand, coliform), (100.0, 100.0, 100.0));
    }

    #[rstest]
    #[case(r#"{"dominantColor":{"r":300,"g":0,"b":0},"colorVariance":10}"#)]
    #[case(r#"{"dominantColor":{"r":10,"g":0,"b":0},"colorVariance":-1}"#)]
    #[case(r#"{"dominantColor":{"r":10,"g":0,"b":0},"colorVariance":1,"station":{"do":7,"bod":3,"coliform":5000,"ph":15}}"#)]
    #[case(r#"{"dominantColor":{"r":10,"g":0,"b":0},"colorVariance":1,"station":{"do":-1,"bod":3,"coliform":5000,"ph":7}}"#)]
    fn rejects_invalid_json(#[case] json: &str) {
        assert!(serde_json::from_str::<WaterFeatures>(json).is_err());
    }

    #[rstest]
    fn missing_station_uses_fallback_readings() {
        let parsed: WaterFeatures =
            serde_json::from_str(r#"{"dominantColor":{"r":100,"g":150,"b":200},"colorVariance":30}"#)
                .expect("decode water features");
        assert_eq!(parsed.station(), StationReadings::default());
        assert_eq!(parsed.color_variance(), 30.0);
    }

    #[rstest]
    fn assessment_serialises_station_fields_by_short_name() {
        let assessment = WaterScorer::default().score(&features(
            (100.0, 150.0, 200.0),
            20.0,
            StationReadings::default(),
        ));
        let value = serde_json::to_value(&assessment).expect("serialise assessment");
        assert_eq!(value["status"], "Good");
        assert_eq!(value["breakdown"]["cpcb"]["do"], 7.0);
        assert_eq!(value["breakdown"]["cpcb"]["bod"], 3.0);
        assert_eq!(value["breakdown"]["image"]["foamAlgaeScore"], 100.0);
    }

    #[rstest]
    fn measures_mean_colour_and_channel_spread() {
        let raster = test_support::grey_raster(2, 1, &[0, 200]).expect("valid raster");
        let measured = WaterFeatures::measure(&raster, StationReadings::default());
        assert_eq!(
            measured.dominant_color(),
            DominantColor::new(100.0, 100.0, 100.0).expect("valid colour")
        );
        assert_eq!(measured.color_variance(), 100.0);
    }
}
