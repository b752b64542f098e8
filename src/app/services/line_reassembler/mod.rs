//! Line reassembly for the copied CSO outfall listing
//!
//! Copying the outfall table out of the CSO report breaks every entry across
//! several physical lines. This module stitches them back together with a
//! single accumulator pass.
//!
//! ## Architecture
//!
//! - [`classifier`] - Tags each raw line with its [`LineKind`](crate::LineKind)
//! - [`reassembler`] - Folds classified lines into output records
//! - [`stats`] - Reassembly statistics and result structures
//!
//! ## Boundary heuristic
//!
//! A line whose last character is not a digit closes the record being built
//! (in the report these are usually town names). If such a line also starts
//! with a digit, the number before the first space still belongs to the old
//! record and the rest of the line starts the new one. Every other line is
//! joined onto the current record with a comma.
//!
//! ## Usage
//!
//! ```rust
//! use cso_outfalls::RawLine;
//! use cso_outfalls::app::services::line_reassembler::LineReassembler;
//!
//! # fn example() -> cso_outfalls::Result<()> {
//! let lines = RawLine::sequence(["001", "MAIN STREET 5", "12", "OAK AVE"]);
//! let result = LineReassembler::legacy().reassemble(&lines)?;
//!
//! assert_eq!(result.record_strings(), vec![",001,MAIN STREET 5,12"]);
//! assert_eq!(result.stats.dropped_trailing.as_deref(), Some("OAK AVE"));
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod reassembler;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::classify;
pub use reassembler::{LineReassembler, ReassemblyOptions};
pub use stats::{ReassemblyResult, ReassemblyStats};
