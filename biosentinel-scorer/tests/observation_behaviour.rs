#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for observation scoring, fallbacks and alerts.

use std::cell::RefCell;

use biosentinel_core::{RiskScorer, RiskTier};
use biosentinel_scorer::test_support::FixedOccurrences;
use biosentinel_scorer::{
    Coordinates, EndangeredRegistry, ObservationAlert, ObservationFeatures, ObservationResult,
    ObservationScorer, ObservationSite, resolve_observation_features,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Shared state for one scenario run.
#[derive(Default)]
pub struct ObservationContext {
    source: RefCell<Option<FixedOccurrences>>,
    features: RefCell<Option<ObservationFeatures>>,
    result: RefCell<Option<ObservationResult>>,
    alert: RefCell<Option<ObservationAlert>>,
}

/// Fresh context for each scenario.
#[fixture]
pub fn context() -> ObservationContext {
    ObservationContext::default()
}

fn set_features(context: &ObservationContext, recent: u32, baseline: u32, endangered: bool, proximity: f64) {
    let features = ObservationFeatures::new(recent, baseline, endangered, proximity)
        .expect("valid observation features");
    context.features.replace(Some(features));
}

fn result(context: &ObservationContext) -> ObservationResult {
    context
        .result
        .borrow()
        .clone()
        .expect("observation must be scored first")
}

#[given("an endangered species with 300 recent and 100 historical sightings at proximity 0.7")]
fn endangered_surge(context: &ObservationContext) {
    set_features(context, 300, 100, true, 0.7);
}

#[given("a common species with 10 recent and 100 historical sightings at proximity 0.2")]
fn common_decline(context: &ObservationContext) {
    set_features(context, 10, 100, false, 0.2);
}

#[given("an occurrence source whose historical lookup fails after 12 recent sightings")]
fn failing_history(context: &ObservationContext) {
    context.source.replace(Some(FixedOccurrences::new(
        Ok(12),
        Err(FixedOccurrences::outage()),
    )));
}

#[when("the observation features are resolved for a tiger")]
fn resolve_for_tiger(context: &ObservationContext) {
    let configured = context.source.borrow();
    let source = configured.as_ref().expect("occurrence source configured");
    let site = ObservationSite::new("Panthera tigris", 21.5, 79.1);
    let features =
        resolve_observation_features(source, &EndangeredRegistry::default(), &site, 0.75)
            .expect("valid resolved features");
    context.features.replace(Some(features));
}

#[when("the observation is scored")]
fn score_observation(context: &ObservationContext) {
    let features = context.features.borrow().expect("features configured");
    context
        .result
        .replace(Some(ObservationScorer::default().score(&features)));
}

#[when("an alert is derived for a tiger")]
fn derive_alert(context: &ObservationContext) {
    let here = Coordinates::new(21.5, 79.1).expect("valid coordinates");
    let alert = ObservationAlert::derive("Panthera tigris", here, &result(context));
    context.alert.replace(alert);
}

#[then("the total is 3.8 and the tier is Critical")]
fn total_is_critical(context: &ObservationContext) {
    let scored = result(context);
    assert_eq!(scored.total, 3.8);
    assert_eq!(scored.tier, RiskTier::Critical);
    assert_eq!(scored.details.trend_ratio, 3.0);
}

#[then("three reasons are reported in rule order")]
fn three_reasons(context: &ObservationContext) {
    assert_eq!(
        result(context).reasons,
        [
            "Endangered species detected",
            "Major surge in sightings (3.0x average)",
            "Near human-populated areas",
        ]
    );
}

#[then("the total is 1.0 and the tier is At Risk")]
fn total_is_at_risk(context: &ObservationContext) {
    let scored = result(context);
    assert_eq!(scored.total, 1.0);
    assert_eq!(scored.tier, RiskTier::AtRisk);
    assert_eq!(scored.details.trend_ratio, 0.1);
}

#[then("only the decline reason is reported")]
fn decline_only(context: &ObservationContext) {
    assert_eq!(
        result(context).reasons,
        ["Decline in sightings (0.1x average)"]
    );
}

#[then("the trend ratio is 3.0")]
fn trend_ratio_is_three(context: &ObservationContext) {
    assert_eq!(result(context).details.trend_ratio, 3.0);
}

#[then("the tier is Critical")]
fn tier_is_critical(context: &ObservationContext) {
    assert_eq!(result(context).tier, RiskTier::Critical);
}

#[then("the alert confidence is capped at 99 percent")]
fn alert_capped(context: &ObservationContext) {
    let alert = context.alert.borrow().clone().expect("alert derived");
    assert_eq!(alert.confidence, 99.0);
    assert_eq!(alert.title, "Panthera tigris Activity Alert");
    assert_eq!(alert.location, "21.50° N, 79.10° E");
}

#[scenario(path = "tests/features/observation.feature", index = 0)]
fn endangered_surge_is_critical(context: ObservationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/observation.feature", index = 1)]
fn common_decline_is_at_risk(context: ObservationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/observation.feature", index = 2)]
fn historical_failure_uses_fallback(context: ObservationContext) {
    let _ = context;
}

#[scenario(path = "tests/features/observation.feature", index = 3)]
fn risky_observation_raises_alert(context: ObservationContext) {
    let _ = context;
}
