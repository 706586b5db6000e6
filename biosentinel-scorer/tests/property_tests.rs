//! Property-based tests for the domain scorers.
//!
//! # Invariants tested
//!
//! - **Determinism:** scoring the same features twice gives identical
//!   results.
//! - **Proximity monotonicity:** raising proximity never lowers the total.
//! - **Exclusive trend rules:** at most one trend reason is ever reported.
//! - **Exact totals:** the total equals the sum of the fired rule weights.
//! - **Lossless serialisation:** results, image features and image
//!   assessments survive a JSON round trip.
//! - **Image gate:** acceptance is the negation of suspicion.

use biosentinel_core::{RiskScorer, RiskTier};
use biosentinel_scorer::{
    ImageAssessment, ImageFeatures, ImageScorer, ObservationFeatures, ObservationResult,
    ObservationScorer, PixelStatistics, SatelliteFeatures, SatelliteResult, SatelliteScorer,
};
use proptest::prelude::*;

/// Values in `[0, 1]` with two decimals, as the engine reports them.
fn hundredths() -> impl Strategy<Value = f64> {
    hundredths_up_to(100)
}

#[expect(clippy::float_arithmetic, reason = "scales integer hundredths into a ratio")]
fn hundredths_up_to(max_centis: u32) -> impl Strategy<Value = f64> {
    (0_u32..=max_centis).prop_map(|centis| f64::from(centis) / 100.0)
}

fn image() -> impl Strategy<Value = ImageFeatures> {
    (
        prop_oneof![
            Just("ai"),
            Just("human"),
            Just("AI-Generated"),
            Just("artificial render"),
            Just("camera"),
        ],
        hundredths(),
        hundredths_up_to(20_000),
        hundredths(),
        0_u32..5_000,
        hundredths(),
    )
        .prop_map(|(label, confidence, std, edges, colours, ratio)| {
            let pixels = PixelStatistics::new(std, edges, colours, ratio)
                .unwrap_or_else(|err| panic!("strategy produced invalid pixels: {err}"));
            ImageFeatures::new(label, confidence, pixels)
                .unwrap_or_else(|err| panic!("strategy produced invalid image features: {err}"))
        })
}

fn observation() -> impl Strategy<Value = ObservationFeatures> {
    (0_u32..1_000, 0_u32..500, any::<bool>(), hundredths()).prop_map(
        |(recent, baseline, endangered, proximity)| {
            ObservationFeatures::new(recent, baseline, endangered, proximity)
                .unwrap_or_else(|err| panic!("strategy produced invalid features: {err}"))
        },
    )
}

fn trend_reasons(result: &ObservationResult) -> usize {
    result
        .reasons
        .iter()
        .filter(|reason| reason.ends_with("x average)"))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: scoring is a pure function of the features.
    #[test]
    fn observation_scoring_is_deterministic(features in observation()) {
        let scorer = ObservationScorer::default();
        prop_assert_eq!(scorer.score(&features), scorer.score(&features));
    }

    /// Property: moving closer to people never reduces the score.
    #[test]
    fn proximity_is_monotonic(
        features in observation(),
        low in 0.0_f64..=1.0,
        high in 0.0_f64..=1.0,
    ) {
        let (near, far) = if low <= high { (high, low) } else { (low, high) };
        let scorer = ObservationScorer::default();
        let with = |proximity: f64| {
            ObservationFeatures::new(
                features.recent_count(),
                features.historical_baseline(),
                features.is_endangered(),
                proximity,
            )
            .unwrap_or_else(|err| panic!("invalid proximity: {err}"))
        };
        let near_result = scorer.score(&with(near));
        let far_result = scorer.score(&with(far));
        prop_assert!(near_result.total >= far_result.total);
        prop_assert!(near_result.tier >= far_result.tier);
    }

    /// Property: the trend bucket contributes at most one reason.
    #[test]
    fn trend_rules_are_exclusive(features in observation()) {
        let result = ObservationScorer::default().score(&features);
        prop_assert!(trend_reasons(&result) <= 1);
        prop_assert!(result.reasons.len() <= 3);
    }

    /// Property: the tier always matches the reported total.
    #[test]
    fn tier_matches_total(features in observation()) {
        let result = ObservationScorer::default().score(&features);
        prop_assert_eq!(result.tier, RiskTier::classify(result.total));
    }

    /// Property: observation results survive a JSON round trip.
    #[test]
    fn observation_round_trips(features in observation()) {
        let result = ObservationScorer::default().score(&features);
        let json = serde_json::to_string(&result)
            .unwrap_or_else(|err| panic!("serialise observation result: {err}"));
        let parsed: ObservationResult = serde_json::from_str(&json)
            .unwrap_or_else(|err| panic!("parse observation result: {err}"));
        prop_assert_eq!(parsed, result);
    }

    /// Property: satellite totals use only the documented weights.
    #[test]
    fn satellite_totals_are_exact(
        hotspots in proptest::option::of(0_u32..200),
        vegetation in proptest::option::of(hundredths()),
    ) {
        let features = SatelliteFeatures::new(hotspots, vegetation, None)
            .unwrap_or_else(|err| panic!("invalid satellite features: {err}"));
        let result = SatelliteScorer::default().score(&features);
        prop_assert!([0.0, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5].contains(&result.total));
        let json = serde_json::to_string(&result)
            .unwrap_or_else(|err| panic!("serialise satellite result: {err}"));
        let parsed: SatelliteResult = serde_json::from_str(&json)
            .unwrap_or_else(|err| panic!("parse satellite result: {err}"));
        prop_assert_eq!(parsed, result);
    }

    /// Property: image features and assessments survive a JSON round trip.
    #[test]
    fn image_round_trips(features in image()) {
        let features_json = serde_json::to_string(&features)
            .unwrap_or_else(|err| panic!("serialise image features: {err}"));
        let parsed_features: ImageFeatures = serde_json::from_str(&features_json)
            .unwrap_or_else(|err| panic!("parse image features: {err}"));
        prop_assert_eq!(&parsed_features, &features);

        let assessment = ImageScorer::default().score(&features);
        let assessment_json = serde_json::to_string(&assessment)
            .unwrap_or_else(|err| panic!("serialise image assessment: {err}"));
        let parsed_assessment: ImageAssessment = serde_json::from_str(&assessment_json)
            .unwrap_or_else(|err| panic!("parse image assessment: {err}"));
        prop_assert_eq!(parsed_assessment, assessment);
    }

    /// Property: an image is accepted exactly when nothing looked suspicious.
    #[test]
    fn acceptance_matches_suspicion(features in image()) {
        let assessment = ImageScorer::default().score(&features);
        prop_assert_eq!(
            assessment.overall_assessment.is_accepted,
            !(assessment.ai_detection.is_ai || assessment.pixel_analysis.is_suspicious)
        );
    }
}
