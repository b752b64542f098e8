//! Command implementations for the CSO outfall converter CLI
//!
//! The converter has a single command; this module keeps the entry point
//! separate from its implementation and shared helpers.

pub mod convert;
pub mod shared;

pub use convert::convert;
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::Args;

/// Main command runner
pub fn run(args: Args) -> Result<ConversionStats> {
    convert::run_convert(args)
}
