//! Line classification
//!
//! Maps the ends-in-digit / starts-with-digit heuristics onto [`LineKind`].

use crate::app::models::{LineKind, RawLine};
use crate::{Error, Result};

/// Classify a raw line for the reassembler
///
/// Fails with [`Error::MalformedLine`] when a boundary line starts with a
/// digit but has no space to separate the number from the rest.
pub fn classify(line: &RawLine) -> Result<LineKind<'_>> {
    if line.content.is_empty() {
        return Ok(LineKind::Empty);
    }

    if !line.ends_non_numeric() {
        return Ok(LineKind::Continuation);
    }

    if !line.starts_numeric() {
        return Ok(LineKind::PlainBoundary);
    }

    let (head, tail) = line
        .split_head()
        .ok_or_else(|| Error::malformed_line(line.position, line.content.as_str()))?;

    Ok(LineKind::NumberedBoundary { head, tail })
}
