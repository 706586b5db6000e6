//! `observation` command: score a species observation and derive an alert.

use std::io::Write;

use biosentinel_core::{InputError, RiskScorer};
use biosentinel_scorer::{
    Coordinates, EndangeredRegistry, ObservationAlert, ObservationFeatures, ObservationResult,
    ObservationScorer,
};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{ReportPaths, emit, load_json, require_existing};
use crate::{ARG_INPUT, ARG_OUTPUT, ARG_REGISTRY, CliError, ENV_OBSERVATION_INPUT};

/// CLI arguments for the `observation` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "observation",
    long_about = "Score a species observation. The input is a JSON object \
                 with recentCount, historicalBaseline, humanProximity and an \
                 optional isEndangered flag. A species name is also looked up \
                 in the endangered registry; with latitude and longitude as \
                 well, an alert is attached for risky results.",
    about = "Score a species observation"
)]
#[ortho_config(prefix = "BIOSENTINEL")]
pub(crate) struct ObservationArgs {
    /// Path to the JSON observation features.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// JSON array of species names replacing the built-in endangered list.
    #[arg(long = ARG_REGISTRY, value_name = "path")]
    #[serde(default)]
    pub(crate) endangered_registry: Option<Utf8PathBuf>,
}

impl ObservationArgs {
    pub(crate) fn into_config(self) -> Result<ObservationConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ObservationConfig::try_from(merged)
    }
}

/// Resolved `observation` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ObservationConfig {
    pub(crate) paths: ReportPaths,
    pub(crate) endangered_registry: Option<Utf8PathBuf>,
}

impl ObservationConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.paths.input, ARG_INPUT)?;
        if let Some(registry) = &self.endangered_registry {
            require_existing(registry, ARG_REGISTRY)?;
        }
        Ok(())
    }

    fn registry(&self) -> Result<EndangeredRegistry, CliError> {
        match &self.endangered_registry {
            Some(path) => {
                let names: Vec<String> = load_json(path)?;
                Ok(names.into_iter().collect())
            }
            None => Ok(EndangeredRegistry::default()),
        }
    }
}

impl TryFrom<ObservationArgs> for ObservationConfig {
    type Error = CliError;

    fn try_from(args: ObservationArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            paths: ReportPaths::resolve(args.input, args.output, ENV_OBSERVATION_INPUT)?,
            endangered_registry: args.endangered_registry,
        })
    }
}

/// Observation features plus optional context for registry lookup and
/// alerting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawObservationRequest")]
pub(crate) struct ObservationRequest {
    pub(crate) species: Option<String>,
    pub(crate) location: Option<Coordinates>,
    pub(crate) features: ObservationFeatures,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawObservationRequest {
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(flatten)]
    features: ObservationFeatures,
}

impl TryFrom<RawObservationRequest> for ObservationRequest {
    type Error = InputError;

    fn try_from(raw: RawObservationRequest) -> Result<Self, Self::Error> {
        let location = match (raw.latitude, raw.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)?),
            _ => None,
        };
        Ok(Self {
            species: raw.species,
            location,
            features: raw.features,
        })
    }
}

/// Scored observation with the alert it raised, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ObservationReport {
    #[serde(flatten)]
    pub(crate) result: ObservationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) alert: Option<ObservationAlert>,
}

pub(crate) fn score_request(
    request: &ObservationRequest,
    registry: &EndangeredRegistry,
) -> ObservationReport {
    let listed = request
        .species
        .as_deref()
        .is_some_and(|species| registry.contains(species));
    let features = request
        .features
        .with_endangered(request.features.is_endangered() || listed);
    let result = ObservationScorer::default().score(&features);
    let alert = match (&request.species, request.location) {
        (Some(species), Some(location)) => ObservationAlert::derive(species, location, &result),
        _ => None,
    };
    if let Some(raised) = &alert {
        log::info!("{} ({})", raised.title, raised.level);
    }
    ObservationReport { result, alert }
}

pub(crate) fn run_observation_with(
    args: ObservationArgs,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let registry = config.registry()?;
    let request: ObservationRequest = load_json(&config.paths.input)?;
    let report = score_request(&request, &registry);
    emit(&report, config.paths.output.as_deref(), stdout)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ObservationConfig, CliError> {
    let merged = ObservationArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ObservationConfig::try_from(merged)
}
