//! `satellite` command: score an area of interest from layer readings.

use std::io::Write;

use biosentinel_core::RiskScorer;
use biosentinel_scorer::{SatelliteFeatures, SatelliteScorer};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{ReportPaths, emit, load_json, require_existing};
use crate::{ARG_INPUT, ARG_OUTPUT, CliError, ENV_SATELLITE_INPUT};

/// CLI arguments for the `satellite` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "satellite",
    long_about = "Score an area of interest. The input is a JSON object with \
                 optional fireHotspotCount, vegetationIndex and lastUpdate \
                 fields; missing layers contribute nothing.",
    about = "Score satellite layers for an area of interest"
)]
#[ortho_config(prefix = "BIOSENTINEL")]
pub(crate) struct SatelliteArgs {
    /// Path to the JSON satellite features.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SatelliteArgs {
    fn into_paths(self) -> Result<ReportPaths, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ReportPaths::resolve(merged.input, merged.output, ENV_SATELLITE_INPUT)
    }
}

pub(crate) fn run_satellite_with(
    args: SatelliteArgs,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let paths = args.into_paths()?;
    require_existing(&paths.input, ARG_INPUT)?;
    let features: SatelliteFeatures = load_json(&paths.input)?;
    let result = SatelliteScorer::default().score(&features);
    emit(&result, paths.output.as_deref(), stdout)
}
