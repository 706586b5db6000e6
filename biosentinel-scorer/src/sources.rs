//! Collaborator seams that supply raw features, and the fallback policy
//! applied when they fail.
//!
//! Nothing here performs I/O; callers plug in implementations backed by an
//! occurrence database or a satellite feed.

#![forbid(unsafe_code)]

use biosentinel_core::InputError;
use log::warn;

use crate::{
    BoundingBox, EndangeredRegistry, Layer, LayerReadings, ObservationFeatures, SatelliteFeatures,
    SourceError,
};

/// Baseline assumed when the historical lookup fails.
pub const FALLBACK_BASELINE: u32 = 4;
/// How far back the historical window ends, in days.
pub const HISTORICAL_OFFSET_DAYS: u32 = 90;
/// Search radius around the observation, in kilometres.
pub const DEFAULT_RADIUS_KM: u32 = 25;
/// Maximum records counted in the recent window.
pub const RECENT_LIMIT: u32 = 300;
/// Maximum records counted in the historical window.
pub const HISTORICAL_LIMIT: u32 = 100;

/// Time window an occurrence count covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceWindow {
    /// Records up to now.
    Recent,
    /// Records ending `offset_days` before now.
    Historical {
        /// Days between now and the end of the window.
        offset_days: u32,
    },
}

/// Species and place an observation was made at.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSite {
    /// Scientific name of the species.
    pub species: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Search radius in kilometres.
    pub radius_km: u32,
}

impl ObservationSite {
    /// Build a site using the default search radius.
    #[must_use]
    pub fn new(species: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            species: species.into(),
            latitude,
            longitude,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Parameters of one occurrence count.
#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceQuery<'a> {
    /// Where and what to count.
    pub site: &'a ObservationSite,
    /// Maximum number of records to count.
    pub limit: u32,
    /// Time window.
    pub window: OccurrenceWindow,
}

/// Count species occurrences near a site.
pub trait OccurrenceSource: Send + Sync {
    /// Count occurrences matching `query`, capped at its limit.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the count cannot be obtained.
    fn count(&self, query: &OccurrenceQuery<'_>) -> Result<u32, SourceError>;
}

/// Read satellite layers for an area of interest.
pub trait SatelliteSource: Send + Sync {
    /// Read the requested `layers` within `area`.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the feed cannot be read.
    fn layers(&self, area: &BoundingBox, layers: &[Layer]) -> Result<LayerReadings, SourceError>;
}

/// Gather observation features for `site`.
///
/// A failed recent count becomes 0 and a failed historical count becomes
/// [`FALLBACK_BASELINE`]; both are logged. An empty historical window is a
/// genuine zero. Endangerment comes from `registry`.
///
/// # Errors
/// Returns [`InputError`] when `human_proximity` lies outside `[0, 1]`.
pub fn resolve_observation_features(
    source: &dyn OccurrenceSource,
    registry: &EndangeredRegistry,
    site: &ObservationSite,
    human_proximity: f64,
) -> Result<ObservationFeatures, InputError> {
    let recent = source
        .count(&OccurrenceQuery {
            site,
            limit: RECENT_LIMIT,
            window: OccurrenceWindow::Recent,
        })
        .unwrap_or_else(|err| {
            warn!("recent occurrence count for {} failed: {err}", site.species);
            0
        });
    let baseline = source
        .count(&OccurrenceQuery {
            site,
            limit: HISTORICAL_LIMIT,
            window: OccurrenceWindow::Historical {
                offset_days: HISTORICAL_OFFSET_DAYS,
            },
        })
        .unwrap_or_else(|err| {
            warn!(
                "historical occurrence count for {} failed, assuming {FALLBACK_BASELINE}: {err}",
                site.species
            );
            FALLBACK_BASELINE
        });
    ObservationFeatures::new(
        recent,
        baseline,
        registry.contains(&site.species),
        human_proximity,
    )
}

/// Gather satellite features for `area`.
///
/// Only requested layers are kept. A failed source yields no layers, and a
/// vegetation index outside `[0, 1]` is clamped; a non-finite one is
/// dropped.
#[must_use]
pub fn resolve_satellite_features(
    source: &dyn SatelliteSource,
    area: &BoundingBox,
    layers: &[Layer],
) -> SatelliteFeatures {
    let readings = match source.layers(area, layers) {
        Ok(readings) => readings,
        Err(err) => {
            warn!("satellite layers unavailable: {err}");
            return SatelliteFeatures::default();
        }
    };
    let fire = readings
        .fire_hotspots
        .filter(|_| layers.contains(&Layer::Fire));
    let vegetation = readings
        .vegetation_index
        .filter(|index| layers.contains(&Layer::Vegetation) && index.is_finite())
        .map(|index| index.clamp(0.0, 1.0));
    SatelliteFeatures::new(fire, vegetation, readings.last_update).unwrap_or_else(|err| {
        warn!("discarding satellite vegetation reading: {err}");
        SatelliteFeatures::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedOccurrences, FixedSatellite};
    use rstest::rstest;

    fn site() -> ObservationSite {
        ObservationSite::new("Panthera tigris", 21.5, 79.1)
    }

    #[rstest]
    fn historical_failure_falls_back_to_four() {
        let source = FixedOccurrences::new(Ok(12), Err(FixedOccurrences::outage()));
        let features =
            resolve_observation_features(&source, &EndangeredRegistry::default(), &site(), 0.75)
                .expect("valid features");
        assert_eq!(features.recent_count(), 12);
        assert_eq!(features.historical_baseline(), FALLBACK_BASELINE);
        assert!(features.is_endangered());
    }

    #[rstest]
    fn recent_failure_counts_zero() {
        let source = FixedOccurrences::new(Err(FixedOccurrences::outage()), Ok(7));
        let features =
            resolve_observation_features(&source, &EndangeredRegistry::empty(), &site(), 0.0)
                .expect("valid features");
        assert_eq!(features.recent_count(), 0);
        assert_eq!(features.historical_baseline(), 7);
        assert!(!features.is_endangered());
    }

    #[rstest]
    fn empty_historical_window_stays_zero() {
        let source = FixedOccurrences::new(Ok(3), Ok(0));
        let features =
            resolve_observation_features(&source, &EndangeredRegistry::default(), &site(), 0.0)
                .expect("valid features");
        assert_eq!(features.historical_baseline(), 0);
    }

    #[rstest]
    fn queries_use_documented_windows_and_limits() {
        let source = FixedOccurrences::new(Ok(1), Ok(1));
        resolve_observation_features(&source, &EndangeredRegistry::default(), &site(), 0.0)
            .expect("valid features");
        assert_eq!(
            source.seen(),
            [
                (RECENT_LIMIT, OccurrenceWindow::Recent),
                (
                    HISTORICAL_LIMIT,
                    OccurrenceWindow::Historical {
                        offset_days: HISTORICAL_OFFSET_DAYS
                    }
                ),
            ]
        );
    }

    #[rstest]
    fn invalid_proximity_is_rejected() {
        let source = FixedOccurrences::new(Ok(1), Ok(1));
        assert!(
            resolve_observation_features(&source, &EndangeredRegistry::default(), &site(), 1.4)
                .is_err()
        );
    }

    fn area() -> BoundingBox {
        BoundingBox::new(-5.0, 5.0, 100.0, 110.0).expect("valid bounding box")
    }

    #[rstest]
    fn keeps_only_requested_layers() {
        let source = FixedSatellite::new(Ok(LayerReadings {
            fire_hotspots: Some(60),
            vegetation_index: Some(0.2),
            last_update: Some("2025-03-01T00:00:00".to_owned()),
        }));
        let features = resolve_satellite_features(&source, &area(), &[Layer::Fire]);
        assert_eq!(features.fire_hotspots(), Some(60));
        assert_eq!(features.vegetation_index(), None);
        assert_eq!(features.last_update(), Some("2025-03-01T00:00:00"));
    }

    #[rstest]
    #[case(1.3, Some(1.0))]
    #[case(-0.2, Some(0.0))]
    #[case(f64::NAN, None)]
    fn clamps_vegetation(#[case] raw: f64, #[case] expected: Option<f64>) {
        let source = FixedSatellite::new(Ok(LayerReadings {
            vegetation_index: Some(raw),
            ..LayerReadings::default()
        }));
        let features = resolve_satellite_features(&source, &area(), &[Layer::Vegetation]);
        assert_eq!(features.vegetation_index(), expected);
    }

    #[rstest]
    fn failed_feed_yields_no_layers() {
        let source = FixedSatellite::new(Err(SourceError::Unavailable {
            collaborator: "satellite feed",
            message: "timeout".to_owned(),
        }));
        let features =
            resolve_satellite_features(&source, &area(), &[Layer::Fire, Layer::Vegetation]);
        assert_eq!(features, SatelliteFeatures::default());
    }
}
