//! Loading feature files and emitting reports.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ARG_INPUT, CliError};

/// Input and output locations shared by every scoring command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportPaths {
    /// JSON feature file to score.
    pub(crate) input: Utf8PathBuf,
    /// Report destination; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ReportPaths {
    pub(crate) fn resolve(
        input: Option<Utf8PathBuf>,
        output: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let input_path = input.ok_or(CliError::MissingArgument {
            field: ARG_INPUT,
            env,
        })?;
        Ok(Self {
            input: input_path,
            output,
        })
    }
}

/// Require `path` to exist and be a regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match biosentinel_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON document from disk.
///
/// Feature types validate themselves while decoding, so out-of-range values
/// surface here as [`CliError::ParseInput`].
pub(crate) fn load_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = biosentinel_fs::open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `report` as pretty JSON to `output`, or to `stdout` when no output
/// path is configured.
pub(crate) fn emit<T: Serialize>(
    report: &T,
    output: Option<&Utf8Path>,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    match output {
        Some(path) => {
            let mut file =
                biosentinel_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.to_path_buf(),
                    source,
                })?;
            write_payload(&mut file, &payload)?;
            log::info!("report written to {path}");
            Ok(())
        }
        None => write_payload(stdout, &payload),
    }
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> Result<(), CliError> {
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}
