//! Command-line front end for the BioSentinel risk engine.
//!
//! Each subcommand reads one JSON feature file, scores it, and prints the
//! JSON report. Options may come from flags, configuration files, or
//! `BIOSENTINEL_*` environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod image;
mod input;
mod observation;
mod satellite;
mod water;

pub use error::CliError;

use image::ImageArgs;
use observation::ObservationArgs;
use satellite::SatelliteArgs;
use water::WaterArgs;

const ARG_INPUT: &str = "input";
const ARG_OUTPUT: &str = "output";
const ARG_REGISTRY: &str = "endangered-registry";
const ARG_AI_THRESHOLD: &str = "ai-confidence-threshold";
const ARG_PIXEL_THRESHOLD: &str = "pixel-suspicion-threshold";
const ENV_OBSERVATION_INPUT: &str = "BIOSENTINEL_CMDS_OBSERVATION_INPUT";
const ENV_SATELLITE_INPUT: &str = "BIOSENTINEL_CMDS_SATELLITE_INPUT";
const ENV_IMAGE_INPUT: &str = "BIOSENTINEL_CMDS_IMAGE_INPUT";
const ENV_WATER_INPUT: &str = "BIOSENTINEL_CMDS_WATER_INPUT";

/// Run the BioSentinel CLI with the current process arguments and
/// environment, printing reports to standard output.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or input files are
/// invalid, or when the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, stdout: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Observation(args) => observation::run_observation_with(args, stdout),
        Command::Satellite(args) => satellite::run_satellite_with(args, stdout),
        Command::Image(args) => image::run_image_with(args, stdout),
        Command::Water(args) => water::run_water_with(args, stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "biosentinel",
    about = "Risk and authenticity scoring for biodiversity monitoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a species observation.
    Observation(ObservationArgs),
    /// Score satellite layers for an area of interest.
    Satellite(SatelliteArgs),
    /// Assess image authenticity.
    Image(ImageArgs),
    /// Grade river water quality.
    Water(WaterArgs),
}

#[cfg(test)]
mod tests;
