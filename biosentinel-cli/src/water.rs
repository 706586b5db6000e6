//! `water` command: grade river water from photograph and station readings.

use std::io::Write;

use biosentinel_core::RiskScorer;
use biosentinel_scorer::{WaterFeatures, WaterScorer};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{ReportPaths, emit, load_json, require_existing};
use crate::{ARG_INPUT, ARG_OUTPUT, CliError, ENV_WATER_INPUT};

/// CLI arguments for the `water` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "water",
    long_about = "Grade river water quality. The input is a JSON object with \
                 dominantColor ({r, g, b}), colorVariance and an optional \
                 station object ({do, bod, coliform, ph}); typical readings \
                 are assumed when the station is omitted.",
    about = "Grade river water quality"
)]
#[ortho_config(prefix = "BIOSENTINEL")]
pub(crate) struct WaterArgs {
    /// Path to the JSON water features.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl WaterArgs {
    fn into_paths(self) -> Result<ReportPaths, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ReportPaths::resolve(merged.input, merged.output, ENV_WATER_INPUT)
    }
}

pub(crate) fn run_water_with(args: WaterArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let paths = args.into_paths()?;
    require_existing(&paths.input, ARG_INPUT)?;
    let features: WaterFeatures = load_json(&paths.input)?;
    let assessment = WaterScorer::default().score(&features);
    emit(&assessment, paths.output.as_deref(), stdout)
}
