//! Data models for CSO outfall report reassembly
//!
//! This module contains the core data structures that flow through a
//! reassembly pass: raw input lines, their classification, and the finished
//! output records.

use crate::constants::HEAD_SEPARATOR;
use std::fmt;

// =============================================================================
// Raw Input Line
// =============================================================================

/// A single physical line of the copied report
///
/// The trailing newline has already been stripped. `position` is the
/// zero-based index of the line in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub content: String,
    pub position: usize,
}

impl RawLine {
    pub fn new(position: usize, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position,
        }
    }

    /// Number the lines of `contents` in order
    pub fn sequence<I, S>(contents: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        contents
            .into_iter()
            .enumerate()
            .map(|(position, content)| Self::new(position, content))
            .collect()
    }

    /// True when the line is non-empty and its last character is not an ASCII digit
    pub fn ends_non_numeric(&self) -> bool {
        self.content
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_ascii_digit())
    }

    /// True when the first character is an ASCII digit
    pub fn starts_numeric(&self) -> bool {
        self.content
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    }

    /// Split at the first space into the leading number and the remainder
    pub fn split_head(&self) -> Option<(&str, &str)> {
        self.content.split_once(HEAD_SEPARATOR)
    }
}

// =============================================================================
// Line Classification
// =============================================================================

/// What a physical line means for the record currently being assembled
///
/// Derived from two heuristics: whether the line ends in a non-digit (a
/// boundary, usually a city name) and whether it starts with a digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Ends in a digit; joined onto the current record
    Continuation,

    /// Starts with a digit and ends in a non-digit, e.g. `5 MAIN STREET`.
    /// `head` closes the current record, `tail` starts the next one.
    NumberedBoundary { head: &'a str, tail: &'a str },

    /// Ends in a non-digit without a leading digit, e.g. `PORTLAND`.
    /// The whole line starts the next record.
    PlainBoundary,

    /// Zero-length line; joined onto the current record like a continuation
    Empty,
}

impl LineKind<'_> {
    /// Whether this kind closes the record being assembled
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            LineKind::NumberedBoundary { .. } | LineKind::PlainBoundary
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Continuation => "continuation",
            LineKind::NumberedBoundary { .. } => "numbered boundary",
            LineKind::PlainBoundary => "plain boundary",
            LineKind::Empty => "empty",
        }
    }
}

// =============================================================================
// Output Record
// =============================================================================

/// A finished, comma-delimited outfall record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord(String);

impl OutputRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OutputRecord {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl PartialEq<&str> for OutputRecord {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_non_numeric() {
        assert!(RawLine::new(0, "PORTLAND").ends_non_numeric());
        assert!(RawLine::new(0, "5 MAIN STREET").ends_non_numeric());
        assert!(RawLine::new(0, "12 ").ends_non_numeric());
        assert!(!RawLine::new(0, "MAIN STREET 5").ends_non_numeric());
        assert!(!RawLine::new(0, "001").ends_non_numeric());
        assert!(!RawLine::new(0, "").ends_non_numeric());
    }

    #[test]
    fn test_starts_numeric() {
        assert!(RawLine::new(0, "5 MAIN STREET").starts_numeric());
        assert!(RawLine::new(0, "001").starts_numeric());
        assert!(!RawLine::new(0, "PORTLAND").starts_numeric());
        assert!(!RawLine::new(0, " 5 MAIN").starts_numeric());
        assert!(!RawLine::new(0, "").starts_numeric());
    }

    #[test]
    fn test_non_ascii_digits_are_not_digits() {
        // Arabic-Indic digit three
        let line = RawLine::new(0, "MAIN \u{0663}");
        assert!(line.ends_non_numeric());
        assert!(!RawLine::new(0, "\u{0663} MAIN").starts_numeric());
    }

    #[test]
    fn test_split_head_first_space_only() {
        let line = RawLine::new(3, "17 SOUTH MAIN STREET");
        assert_eq!(line.split_head(), Some(("17", "SOUTH MAIN STREET")));
        assert_eq!(RawLine::new(0, "17 ").split_head(), Some(("17", "")));
        assert_eq!(RawLine::new(0, "17A").split_head(), None);
    }

    #[test]
    fn test_sequence_numbers_lines() {
        let lines = RawLine::sequence(["a", "b", "c"]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], RawLine::new(2, "c"));
    }

    #[test]
    fn test_line_kind_boundary() {
        assert!(LineKind::PlainBoundary.is_boundary());
        assert!(
            LineKind::NumberedBoundary {
                head: "5",
                tail: "MAIN"
            }
            .is_boundary()
        );
        assert!(!LineKind::Continuation.is_boundary());
        assert!(!LineKind::Empty.is_boundary());
    }

    #[test]
    fn test_output_record_display() {
        let record = OutputRecord::new(",001,MAIN STREET 5,12");
        assert_eq!(record.to_string(), ",001,MAIN STREET 5,12");
        assert_eq!(record, ",001,MAIN STREET 5,12");
        assert!(OutputRecord::new("").is_empty());
    }
}
