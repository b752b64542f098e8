//! Tests for the line reassembly module
//!
//! Unit tests for classification, the reassembly fold and its statistics.


// Test helper functions and fixtures
use crate::app::models::RawLine;

/// Number a list of literal lines
pub fn lines(contents: &[&str]) -> Vec<RawLine> {
    RawLine::sequence(contents.iter().copied())
}

/// A short excerpt shaped like the copied CSO report
///
/// Each entry opens with a town name followed by the outfall number, the
/// receiving water and a count; the next town name closes it.
pub fn report_excerpt() -> Vec<RawLine> {
    lines(&[
        "BANGOR",
        "ME0001",
        "PENOBSCOT RIVER 3",
        "12",
        "BREWER",
        "014",
        "KENDUSKEAG STREAM 1",
        "2 LEWISTON",
        "027",
        "ANDROSCOGGIN RIVER 4",
        "AUBURN",
    ])
}
