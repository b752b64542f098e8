//! Filesystem access for the report converter
//!
//! Reads the copied report into numbered raw lines and opens the output file
//! for writing. Both files are held only for the duration of one call.

use crate::app::models::RawLine;
use crate::{Error, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Read every line of `path`, stripping the line terminators
///
/// Both `\n` and `\r\n` endings are accepted. The file is closed before
/// this returns.
pub fn read_lines(path: &Path) -> Result<Vec<RawLine>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (position, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            Error::io(
                format!("Failed to read line {} of {}", position + 1, path.display()),
                e,
            )
        })?;
        lines.push(RawLine::new(position, line));
    }

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Create (or truncate) `path` for buffered writing
///
/// Missing parent directories are created.
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    Ok(BufWriter::new(file))
}
