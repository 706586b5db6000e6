//! Risk scoring for species observations.
//!
//! An observation is scored from three independent signals: membership of
//! the endangered-species registry, the trend of recent sightings against a
//! historical baseline, and proximity to human settlement. Each signal is a
//! separate bucket of the [`observation_rules`] table.

#![forbid(unsafe_code)]

use biosentinel_core::{
    Bucket, InputError, Reason, RiskScorer, Rule, RuleTable, ScoringResult, Weight, round_to,
    trend_ratio, validate,
};
use serde::{Deserialize, Serialize};

/// Result of scoring an observation.
pub type ObservationResult = ScoringResult<ObservationDetails>;

/// Validated inputs for one observation.
///
/// Counts are non-negative by construction and `human_proximity` lies in
/// `[0, 1]`. JSON input is validated while it is decoded, so a negative
/// count or an out-of-range proximity never reaches the scorer.
///
/// # Examples
/// ```
/// use biosentinel_scorer::ObservationFeatures;
///
/// let features = ObservationFeatures::new(12, 4, true, 0.75).expect("valid features");
/// assert_eq!(features.recent_count(), 12);
/// assert!(ObservationFeatures::new(1, 1, false, 1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawObservationFeatures")]
pub struct ObservationFeatures {
    recent_count: u32,
    historical_baseline: u32,
    is_endangered: bool,
    human_proximity: f64,
}

impl ObservationFeatures {
    /// Validate and build a feature set.
    ///
    /// # Errors
    /// Returns [`InputError`] when `human_proximity` is not finite or lies
    /// outside `[0, 1]`.
    pub fn new(
        recent_count: u32,
        historical_baseline: u32,
        is_endangered: bool,
        human_proximity: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            recent_count,
            historical_baseline,
            is_endangered,
            human_proximity: validate::unit_interval("humanProximity", human_proximity)?,
        })
    }

    /// Sightings in the recent window.
    #[must_use]
    pub const fn recent_count(&self) -> u32 {
        self.recent_count
    }

    /// Sightings in the historical window.
    #[must_use]
    pub const fn historical_baseline(&self) -> u32 {
        self.historical_baseline
    }

    /// Whether the species is considered endangered.
    #[must_use]
    pub const fn is_endangered(&self) -> bool {
        self.is_endangered
    }

    /// Estimated closeness to human settlement in `[0, 1]`.
    #[must_use]
    pub const fn human_proximity(&self) -> f64 {
        self.human_proximity
    }

    /// Return a copy with the endangered flag replaced.
    #[must_use]
    pub const fn with_endangered(mut self, is_endangered: bool) -> Self {
        self.is_endangered = is_endangered;
        self
    }
}

/// Wire form of [`ObservationFeatures`] prior to validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawObservationFeatures {
    recent_count: i64,
    historical_baseline: i64,
    #[serde(default)]
    is_endangered: bool,
    human_proximity: f64,
}

impl TryFrom<RawObservationFeatures> for ObservationFeatures {
    type Error = InputError;

    fn try_from(raw: RawObservationFeatures) -> Result<Self, Self::Error> {
        Self::new(
            validate::count("recentCount", raw.recent_count)?,
            validate::count("historicalBaseline", raw.historical_baseline)?,
            raw.is_endangered,
            raw.human_proximity,
        )
    }
}

/// Derived signals the observation rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationSignals {
    /// Recent count divided by the floor-protected baseline.
    pub trend_ratio: f64,
    /// Whether the species is endangered.
    pub is_endangered: bool,
    /// Closeness to human settlement in `[0, 1]`.
    pub human_proximity: f64,
}

impl From<&ObservationFeatures> for ObservationSignals {
    fn from(features: &ObservationFeatures) -> Self {
        Self {
            trend_ratio: trend_ratio(features.recent_count, features.historical_baseline),
            is_endangered: features.is_endangered,
            human_proximity: features.human_proximity,
        }
    }
}

/// Observation-specific fields reported alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDetails {
    /// Sightings in the recent window.
    pub observations: u32,
    /// Trend ratio rounded to two decimals.
    pub trend_ratio: f64,
    /// Whether the species is endangered.
    pub is_endangered: bool,
    /// Proximity estimate used for scoring.
    pub human_proximity: f64,
}

/// Build the default observation rule table.
///
/// Buckets are evaluated in the order endangered, trend, proximity, which
/// is also the order of the reasons they contribute.
#[must_use]
pub fn observation_rules() -> RuleTable<ObservationSignals> {
    RuleTable::new()
        .with_bucket(Bucket::new("endangered").with_rule(Rule::new(
            Weight::from_centis(150),
            |s: &ObservationSignals| s.is_endangered,
            Reason::Fixed("Endangered species detected"),
        )))
        .with_bucket(
            Bucket::new("trend")
                .with_rule(Rule::new(
                    Weight::from_centis(150),
                    |s: &ObservationSignals| s.trend_ratio >= 3.0,
                    Reason::Computed(|s: &ObservationSignals| {
                        format!("Major surge in sightings ({:.1}x average)", s.trend_ratio)
                    }),
                ))
                .with_rule(Rule::new(
                    Weight::from_centis(120),
                    |s: &ObservationSignals| s.trend_ratio >= 2.0,
                    Reason::Computed(|s: &ObservationSignals| {
                        format!("Unusual increase in sightings ({:.1}x average)", s.trend_ratio)
                    }),
                ))
                .with_rule(Rule::new(
                    Weight::from_centis(100),
                    |s: &ObservationSignals| s.trend_ratio < 0.5,
                    Reason::Computed(|s: &ObservationSignals| {
                        format!("Decline in sightings ({:.1}x average)", s.trend_ratio)
                    }),
                )),
        )
        .with_bucket(
            Bucket::new("proximity")
                .with_rule(Rule::new(
                    Weight::from_centis(80),
                    |s: &ObservationSignals| s.human_proximity >= 0.7,
                    Reason::Fixed("Near human-populated areas"),
                ))
                .with_rule(Rule::new(
                    Weight::from_centis(40),
                    |s: &ObservationSignals| s.human_proximity >= 0.4,
                    Reason::Fixed("Moderate proximity to settlements"),
                )),
        )
}

/// Score observations with a rule table.
///
/// # Examples
/// ```
/// use biosentinel_core::{RiskScorer, RiskTier};
/// use biosentinel_scorer::{ObservationFeatures, ObservationScorer};
///
/// let scorer = ObservationScorer::default();
/// let features = ObservationFeatures::new(12, 4, true, 0.75).expect("valid features");
/// let result = scorer.score(&features);
/// assert_eq!(result.total, 3.8);
/// assert_eq!(result.tier, RiskTier::Critical);
/// ```
#[derive(Debug)]
pub struct ObservationScorer {
    rules: RuleTable<ObservationSignals>,
}

impl ObservationScorer {
    /// Use a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: RuleTable<ObservationSignals>) -> Self {
        Self { rules }
    }

    /// Rule table in use.
    #[must_use]
    pub const fn rules(&self) -> &RuleTable<ObservationSignals> {
        &self.rules
    }
}

impl Default for ObservationScorer {
    fn default() -> Self {
        Self::with_rules(observation_rules())
    }
}

impl RiskScorer for ObservationScorer {
    type Features = ObservationFeatures;
    type Output = ObservationResult;

    fn score(&self, features: &ObservationFeatures) -> ObservationResult {
        let signals = ObservationSignals::from(features);
        let accumulator = self.rules.evaluate(&signals);
        ScoringResult::assemble(
            accumulator,
            ObservationDetails {
                observations: features.recent_count,
                trend_ratio: round_to(signals.trend_ratio, 2),
                is_endangered: features.is_endangered,
                human_proximity: features.human_proximity,
            },
        )
    }
}
