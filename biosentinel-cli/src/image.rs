//! `image` command: gate an image on classifier and pixel evidence.

use std::io::Write;

use biosentinel_core::{RiskScorer, validate};
use biosentinel_scorer::{ImageFeatures, ImageScorer, ImageThresholds};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{ReportPaths, emit, load_json, require_existing};
use crate::{
    ARG_AI_THRESHOLD, ARG_INPUT, ARG_OUTPUT, ARG_PIXEL_THRESHOLD, CliError, ENV_IMAGE_INPUT,
};

/// CLI arguments for the `image` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "image",
    long_about = "Assess an uploaded image. The input is a JSON object with \
                 the classifier's top aiLabel and aiConfidence plus pixelStd, \
                 edgeDensity, uniqueColors and colorRatio statistics.",
    about = "Assess image authenticity"
)]
#[ortho_config(prefix = "BIOSENTINEL")]
pub(crate) struct ImageArgs {
    /// Path to the JSON image features.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// AI confidence above which a rejection is certain (default 0.7).
    #[arg(long = ARG_AI_THRESHOLD, value_name = "ratio")]
    #[serde(default)]
    pub(crate) ai_confidence_threshold: Option<f64>,
    /// Pixel quality above which statistics are suspicious (default 0.95).
    #[arg(long = ARG_PIXEL_THRESHOLD, value_name = "ratio")]
    #[serde(default)]
    pub(crate) pixel_suspicion_threshold: Option<f64>,
}

impl ImageArgs {
    pub(crate) fn into_config(self) -> Result<ImageConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ImageConfig::try_from(merged)
    }
}

/// Resolved `image` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ImageConfig {
    pub(crate) paths: ReportPaths,
    pub(crate) thresholds: ImageThresholds,
}

impl TryFrom<ImageArgs> for ImageConfig {
    type Error = CliError;

    fn try_from(args: ImageArgs) -> Result<Self, Self::Error> {
        let defaults = ImageThresholds::default();
        let threshold = |field: &'static str, value: Option<f64>, fallback: f64| {
            validate::unit_interval(field, value.unwrap_or(fallback))
                .map_err(|source| CliError::InvalidThreshold { field, source })
        };
        Ok(Self {
            thresholds: ImageThresholds {
                ai_confidence: threshold(
                    ARG_AI_THRESHOLD,
                    args.ai_confidence_threshold,
                    defaults.ai_confidence,
                )?,
                pixel_suspicion: threshold(
                    ARG_PIXEL_THRESHOLD,
                    args.pixel_suspicion_threshold,
                    defaults.pixel_suspicion,
                )?,
            },
            paths: ReportPaths::resolve(args.input, args.output, ENV_IMAGE_INPUT)?,
        })
    }
}

pub(crate) fn run_image_with(args: ImageArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.paths.input, ARG_INPUT)?;
    let features: ImageFeatures = load_json(&config.paths.input)?;
    let assessment = ImageScorer::with_thresholds(config.thresholds).score(&features);
    emit(&assessment, config.paths.output.as_deref(), stdout)
}
