//! Reassembly statistics and result structures
//!
//! Tracks how the input lines were classified and what happened at the two
//! edges of the pass (the leading empty record and the trailing remainder).

use crate::app::models::{LineKind, OutputRecord};

/// Statistics for a single reassembly pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReassemblyStats {
    /// Total number of input lines consumed
    pub lines_read: usize,
    /// Lines ending in a digit, joined onto the current record
    pub continuation_lines: usize,
    /// Boundary lines that started with a number, e.g. `5 MAIN STREET`
    pub numbered_boundaries: usize,
    /// Boundary lines without a leading number, e.g. `PORTLAND`
    pub plain_boundaries: usize,
    /// Zero-length lines
    pub empty_lines: usize,
    /// Records in the output sequence
    pub records_emitted: usize,
    /// The first record emitted was the empty initial accumulator
    pub leading_empty_emitted: bool,
    /// The empty initial accumulator was suppressed
    pub leading_empty_skipped: bool,
    /// The remainder after the last boundary was emitted as a record
    pub trailing_flushed: bool,
    /// Text left in the accumulator at end of input that was not written
    pub dropped_trailing: Option<String>,
}

impl ReassemblyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line
    pub fn record_line(&mut self, kind: &LineKind<'_>) {
        self.lines_read += 1;
        match kind {
            LineKind::Continuation => self.continuation_lines += 1,
            LineKind::NumberedBoundary { .. } => self.numbered_boundaries += 1,
            LineKind::PlainBoundary => self.plain_boundaries += 1,
            LineKind::Empty => self.empty_lines += 1,
        }
    }

    /// Total boundary lines seen
    pub fn boundaries(&self) -> usize {
        self.numbered_boundaries + self.plain_boundaries
    }

    /// Whether any input text was left out of the output
    pub fn lost_content(&self) -> bool {
        self.dropped_trailing.is_some()
    }

    /// Warning text for a trailing record that was not written
    pub fn dropped_trailing_message(&self) -> Option<String> {
        self.dropped_trailing.as_ref().map(|dropped| {
            format!(
                "Input ended after the last boundary line; trailing record '{}' is not written",
                dropped
            )
        })
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} lines -> {} records ({} continuation, {} numbered boundary, {} plain boundary, {} empty)",
            self.lines_read,
            self.records_emitted,
            self.continuation_lines,
            self.numbered_boundaries,
            self.plain_boundaries,
            self.empty_lines
        );
        if let Some(dropped) = &self.dropped_trailing {
            summary.push_str(&format!(", dropped trailing '{}'", dropped));
        }
        summary
    }
}

/// Output of a reassembly pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassemblyResult {
    /// Records in input order
    pub records: Vec<OutputRecord>,
    pub stats: ReassemblyStats,
}

impl ReassemblyResult {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Record text in order, for callers that only need strings
    pub fn record_strings(&self) -> Vec<&str> {
        self.records.iter().map(OutputRecord::as_str).collect()
    }
}
