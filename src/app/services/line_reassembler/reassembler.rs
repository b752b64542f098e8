//! Core reassembly pass
//!
//! A single fold over the classified lines with one accumulator. Boundary
//! lines flush the accumulator as a finished record; everything else is
//! joined onto it.

use tracing::{debug, info, trace, warn};

use super::classifier::classify;
use super::stats::{ReassemblyResult, ReassemblyStats};
use crate::Result;
use crate::app::models::{LineKind, OutputRecord, RawLine};
use crate::constants::{CONTINUATION_DELIMITER, NUMBERED_HEAD_DELIMITER};

/// Behaviour switches for the two known quirks of the legacy output
///
/// Both default to `false`, which reproduces the legacy converter byte for byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReassemblyOptions {
    /// Emit whatever is left in the accumulator after the last line.
    /// Without this the final record is lost.
    pub flush_trailing: bool,

    /// Skip the empty record produced when the very first boundary arrives
    /// before anything has been accumulated.
    pub skip_leading_empty: bool,
}

/// Reassembles physical report lines into logical outfall records
#[derive(Debug, Clone, Default)]
pub struct LineReassembler {
    options: ReassemblyOptions,
}

/// Fold state threaded through one pass
#[derive(Debug, Default)]
struct Assembly {
    accumulator: String,
    records: Vec<OutputRecord>,
    flushed_once: bool,
    stats: ReassemblyStats,
}

impl LineReassembler {
    pub fn new(options: ReassemblyOptions) -> Self {
        Self { options }
    }

    /// Reassembler reproducing the legacy output exactly
    pub fn legacy() -> Self {
        Self::default()
    }

    pub fn options(&self) -> ReassemblyOptions {
        self.options
    }

    /// Run one reassembly pass over `lines`
    ///
    /// Pure: the only state is local to this call. Stops at the first
    /// malformed line.
    pub fn reassemble(&self, lines: &[RawLine]) -> Result<ReassemblyResult> {
        debug!(
            "Reassembling {} lines with options {:?}",
            lines.len(),
            self.options
        );

        let assembly = lines
            .iter()
            .try_fold(Assembly::default(), |assembly, line| {
                self.consume(assembly, line)
            })?;

        let result = self.finish(assembly);

        info!(
            "Reassembled {} lines into {} records",
            result.stats.lines_read, result.stats.records_emitted
        );

        Ok(result)
    }

    fn consume(&self, mut assembly: Assembly, line: &RawLine) -> Result<Assembly> {
        let kind = classify(line)?;
        trace!("Line {}: {} '{}'", line.position + 1, kind.label(), line.content);

        assembly.stats.record_line(&kind);

        match kind {
            LineKind::Continuation | LineKind::Empty => {
                assembly.accumulator.push_str(CONTINUATION_DELIMITER);
                assembly.accumulator.push_str(&line.content);
            }
            LineKind::NumberedBoundary { head, tail } => {
                assembly.accumulator.push_str(NUMBERED_HEAD_DELIMITER);
                assembly.accumulator.push_str(head);
                self.flush(&mut assembly, tail, line.position);
            }
            LineKind::PlainBoundary => {
                self.flush(&mut assembly, &line.content, line.position);
            }
        }

        Ok(assembly)
    }

    /// Emit the accumulator as a record and restart it with `new_start`
    fn flush(&self, assembly: &mut Assembly, new_start: &str, position: usize) {
        let record = std::mem::replace(&mut assembly.accumulator, new_start.to_string());
        let first = !assembly.flushed_once;
        assembly.flushed_once = true;

        if first && record.is_empty() {
            if self.options.skip_leading_empty {
                debug!("Skipping empty leading record at line {}", position + 1);
                assembly.stats.leading_empty_skipped = true;
                return;
            }
            assembly.stats.leading_empty_emitted = true;
        }

        debug!("Boundary at line {}: emitting '{}'", position + 1, record);
        assembly.records.push(OutputRecord::new(record));
        assembly.stats.records_emitted += 1;
    }

    fn finish(&self, mut assembly: Assembly) -> ReassemblyResult {
        let remainder = std::mem::take(&mut assembly.accumulator);

        if !remainder.is_empty() {
            if self.options.flush_trailing {
                debug!("Flushing trailing record '{}'", remainder);
                assembly.records.push(OutputRecord::new(remainder));
                assembly.stats.records_emitted += 1;
                assembly.stats.trailing_flushed = true;
            } else {
                assembly.stats.dropped_trailing = Some(remainder);
                if let Some(message) = assembly.stats.dropped_trailing_message() {
                    warn!("{}", message);
                }
            }
        }

        ReassemblyResult {
            records: assembly.records,
            stats: assembly.stats,
        }
    }
}
