//! Record output
//!
//! Writes reassembled records one per line, newline-terminated, to the
//! console and to the output file in the same order.

use crate::app::adapters::filesystem::create_output_file;
use crate::app::models::OutputRecord;
use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Statistics for a completed write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WritingStats {
    /// Records written to the output file
    pub records_written: usize,
    /// Bytes written to the output file, terminators included
    pub bytes_written: u64,
    /// Records echoed to the console
    pub records_echoed: usize,
    /// Output file, if one was written
    pub output_path: Option<PathBuf>,
}

/// Writes records to the console and the output file
#[derive(Debug, Clone)]
pub struct RecordWriter {
    echo_to_console: bool,
}

impl RecordWriter {
    pub fn new(echo_to_console: bool) -> Self {
        Self { echo_to_console }
    }

    /// Write every record followed by `\n` to `sink`, returning bytes written
    pub fn write_to<W: Write>(records: &[OutputRecord], sink: &mut W) -> std::io::Result<u64> {
        let mut bytes = 0u64;
        for record in records {
            sink.write_all(record.as_str().as_bytes())?;
            sink.write_all(b"\n")?;
            bytes += record.as_str().len() as u64 + 1;
        }
        sink.flush()?;
        Ok(bytes)
    }

    /// Echo records to `console` if enabled
    pub fn echo<W: Write>(&self, records: &[OutputRecord], console: &mut W) -> Result<usize> {
        if !self.echo_to_console {
            debug!("Console echo disabled");
            return Ok(0);
        }

        Self::write_to(records, console)
            .map_err(|e| Error::io("Failed to write records to console", e))?;
        Ok(records.len())
    }

    /// Write records to `output_path`, replacing any existing file
    pub fn write_file(
        &self,
        records: &[OutputRecord],
        output_path: &Path,
    ) -> Result<WritingStats> {
        let mut writer = create_output_file(output_path)?;
        let bytes_written = Self::write_to(records, &mut writer).map_err(|e| {
            Error::io(format!("Failed to write {}", output_path.display()), e)
        })?;

        info!(
            "Wrote {} records ({} bytes) to {}",
            records.len(),
            bytes_written,
            output_path.display()
        );

        Ok(WritingStats {
            records_written: records.len(),
            bytes_written,
            records_echoed: 0,
            output_path: Some(output_path.to_path_buf()),
        })
    }

    /// Echo to `console`, then write the output file
    pub fn write_all<W: Write>(
        &self,
        records: &[OutputRecord],
        output_path: &Path,
        console: &mut W,
    ) -> Result<WritingStats> {
        let records_echoed = self.echo(records, console)?;
        let stats = self.write_file(records, output_path)?;

        Ok(WritingStats {
            records_echoed,
            ..stats
        })
    }
}
