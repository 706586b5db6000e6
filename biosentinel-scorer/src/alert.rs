//! Alerts raised from risky observation results.

#![forbid(unsafe_code)]

use biosentinel_core::{InputError, RiskTier, round_to, validate};
use serde::{Deserialize, Serialize};

use crate::ObservationResult;

const ALERT_KIND: &str = "Species Activity";
const ALERT_SOURCE: &str = "GBIF ML Analysis";
const CONFIDENCE_PER_POINT: f64 = 30.0;
const CONFIDENCE_CAP: f64 = 99.0;

/// A validated point on the globe in decimal degrees.
///
/// # Examples
/// ```
/// use biosentinel_scorer::Coordinates;
///
/// let here = Coordinates::new(-3.5, -60.25).expect("valid coordinates");
/// assert_eq!(here.label(), "3.50° S, 60.25° W");
/// assert!(Coordinates::new(200.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validate and build a point.
    ///
    /// # Errors
    /// Returns [`InputError`] when the latitude lies outside `[-90, 90]`,
    /// the longitude outside `[-180, 180]`, or either is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InputError> {
        Ok(Self {
            latitude: validate::in_range("latitude", latitude, -90.0, 90.0)?,
            longitude: validate::in_range("longitude", longitude, -180.0, 180.0)?,
        })
    }

    /// Latitude; negative values lie south of the equator.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude; negative values lie west of Greenwich.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Render as `"12.35° N, 79.10° E"`, choosing hemispheres by sign.
    #[must_use]
    pub fn label(&self) -> String {
        let north_south = if self.latitude < 0.0 { 'S' } else { 'N' };
        let east_west = if self.longitude < 0.0 { 'W' } else { 'E' };
        format!(
            "{:.2}° {north_south}, {:.2}° {east_west}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

#[derive(Debug, Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = InputError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// Alert record derived from an observation at or above the At Risk tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationAlert {
    /// Alert category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tier of the underlying result.
    pub level: RiskTier,
    /// Headline naming the species.
    pub title: String,
    /// Reasons joined into sentences.
    pub description: String,
    /// Human-readable location.
    pub location: String,
    /// Confidence percentage, capped at 99.
    pub confidence: f64,
    /// Analysis that produced the alert.
    pub source: String,
    /// Sightings in the recent window.
    pub observations: u32,
    /// Trend ratio of the result.
    pub trend_ratio: f64,
}

impl ObservationAlert {
    /// Derive an alert from `result`, or `None` when it scored below 1.0.
    ///
    /// # Examples
    /// ```
    /// use biosentinel_core::RiskScorer;
    /// use biosentinel_scorer::{Coordinates, ObservationAlert, ObservationFeatures, ObservationScorer};
    ///
    /// let features = ObservationFeatures::new(12, 4, true, 0.75).expect("valid features");
    /// let result = ObservationScorer::default().score(&features);
    /// let here = Coordinates::new(21.5, 79.1).expect("valid coordinates");
    /// let alert = ObservationAlert::derive("Panthera tigris", here, &result).expect("alert");
    /// assert_eq!(alert.title, "Panthera tigris Activity Alert");
    /// assert_eq!(alert.confidence, 99.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "confidence scales the score into a percentage"
    )]
    pub fn derive(
        species: &str,
        location: Coordinates,
        result: &ObservationResult,
    ) -> Option<Self> {
        if result.tier < RiskTier::AtRisk {
            return None;
        }
        let confidence = (result.total * CONFIDENCE_PER_POINT).min(CONFIDENCE_CAP);
        Some(Self {
            kind: ALERT_KIND.to_owned(),
            level: result.tier,
            title: format!("{species} Activity Alert"),
            description: result.reasons.join(". "),
            location: location.label(),
            confidence: round_to(confidence, 2),
            source: ALERT_SOURCE.to_owned(),
            observations: result.details.observations,
            trend_ratio: result.details.trend_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObservationFeatures, ObservationScorer};
    use biosentinel_core::RiskScorer;
    use rstest::rstest;

    fn result(recent: u32, baseline: u32, endangered: bool, proximity: f64) -> ObservationResult {
        let features = ObservationFeatures::new(recent, baseline, endangered, proximity)
            .expect("valid features");
        ObservationScorer::default().score(&features)
    }

    fn here() -> Coordinates {
        Coordinates::new(21.456, 79.1).expect("valid coordinates")
    }

    #[rstest]
    fn below_one_point_raises_nothing() {
        assert!(ObservationAlert::derive("Vulpes vulpes", here(), &result(5, 5, false, 0.5)).is_none());
    }

    #[rstest]
    fn exactly_one_point_raises_an_alert() {
        let alert = ObservationAlert::derive("Vulpes vulpes", here(), &result(1, 10, false, 0.0))
            .expect("alert at one point");
        assert_eq!(alert.level, RiskTier::AtRisk);
        assert_eq!(alert.confidence, 30.0);
        assert_eq!(alert.description, "Decline in sightings (0.1x average)");
        assert_eq!(alert.location, "21.46° N, 79.10° E");
        assert_eq!(alert.source, "GBIF ML Analysis");
    }

    #[rstest]
    fn confidence_is_capped() {
        let alert = ObservationAlert::derive("Panthera tigris", here(), &result(12, 4, true, 0.75))
            .expect("alert");
        assert_eq!(alert.confidence, 99.0);
        assert_eq!(
            alert.description,
            "Endangered species detected. Major surge in sightings (3.0x average). Near human-populated areas"
        );
        assert_eq!(alert.observations, 12);
        assert_eq!(alert.trend_ratio, 3.0);
    }

    #[rstest]
    #[case(-3.5, -60.25, "3.50° S, 60.25° W")]
    #[case(0.0, 0.0, "0.00° N, 0.00° E")]
    fn labels_follow_hemisphere(#[case] latitude: f64, #[case] longitude: f64, #[case] label: &str) {
        let point = Coordinates::new(latitude, longitude).expect("valid coordinates");
        assert_eq!(point.label(), label);
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 10.0)]
    #[case(0.0, 180.5)]
    #[case(f64::NAN, 0.0)]
    fn out_of_range_coordinates_are_rejected(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(Coordinates::new(latitude, longitude).is_err());
    }

    #[rstest]
    fn deserialising_validates_latitude() {
        let parsed = serde_json::from_str::<Coordinates>(r#"{"latitude": 200.0, "longitude": 0.0}"#);
        assert!(parsed.is_err());
        let point: Coordinates =
            serde_json::from_str(r#"{"latitude": 21.5, "longitude": 79.1}"#).expect("valid point");
        assert_eq!(point.label(), "21.50° N, 79.10° E");
    }

    #[rstest]
    fn serialises_type_field() {
        let alert = ObservationAlert::derive("Panthera tigris", here(), &result(12, 4, true, 0.75))
            .expect("alert");
        let value = serde_json::to_value(&alert).expect("serialise alert");
        assert_eq!(value["type"], "Species Activity");
        assert_eq!(value["level"], "Critical");
        assert_eq!(value["trendRatio"], 3.0);
    }
}
