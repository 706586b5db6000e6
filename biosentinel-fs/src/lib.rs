//! Capability-based file helpers for reading feature files and writing
//! reports.
//!
//! Every path is anchored to an ambient root (the filesystem root, a
//! Windows drive prefix, or the working directory) and resolved relative
//! to it through `cap-std`, so lookups cannot escape that root through
//! symlinks.
#![forbid(unsafe_code)]

use std::io;
use std::path::{Component, MAIN_SEPARATOR};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing UTF-8 path for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report whether an existing `path` names a regular file.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when nothing exists at `path`, and
/// the underlying I/O error when metadata cannot be read.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (root, relative) = anchor(path)?;
    if relative.as_str().is_empty() {
        return Ok(false);
    }
    root.metadata(&relative).map(|meta| meta.is_file())
}

/// Create (or truncate) the file at `path`, creating missing parent
/// directories first.
///
/// # Errors
/// Returns an error when `path` has no file name or when a directory or the
/// file cannot be created.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (root, relative) = anchor(path)?;
    if relative.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path} does not name a file"),
        ));
    }
    if let Some(parent) = relative.parent().filter(|parent| !parent.as_str().is_empty()) {
        root.create_dir_all(parent)?;
    }
    root.create(&relative)
}

/// Split `path` into an ambient root directory and the remainder relative
/// to it.
fn anchor(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_path = path.as_std_path();
    let base = match std_path.components().next() {
        Some(Component::Prefix(prefix)) => {
            let drive = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(format!("{drive}{MAIN_SEPARATOR}"))
        }
        Some(Component::RootDir) => Utf8PathBuf::from(MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if base.as_str() == "." {
        path.to_path_buf()
    } else {
        path.strip_prefix(&base)
            .map_err(|_| io::Error::other(format!("cannot strip {base} from {path}")))?
            .to_path_buf()
    };
    let root = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((root, relative))
}
