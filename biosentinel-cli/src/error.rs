//! Error types emitted by the BioSentinel CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use biosentinel_core::InputError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the BioSentinel CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file was not valid JSON or failed feature validation.
    #[error("failed to parse {path:?}: {source}")]
    ParseInput {
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying failure, including validation messages.
        #[source]
        source: serde_json::Error,
    },
    /// A configured threshold is out of range.
    #[error("invalid {field}: {source}")]
    InvalidThreshold {
        /// Option name.
        field: &'static str,
        /// Validation failure.
        #[source]
        source: InputError,
    },
    /// Serialising a report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Path supplied.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing a report failed.
    #[error("failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
}
