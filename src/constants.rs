//! Application constants for the CSO outfall converter
//!
//! File names, record delimiters and configuration keys used throughout
//! the converter.

// =============================================================================
// File Locations
// =============================================================================

/// Text copied from the 2017 CSO report, one record fragment per line
pub const DEFAULT_INPUT_FILE: &str = "CSO outfalls data copied from 2017 CSO Report.txt";

/// Reassembled output, one outfall record per line
pub const DEFAULT_OUTPUT_FILE: &str = "CSO outfalls2.txt";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "cso-outfalls";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Record Delimiters
// =============================================================================

/// Joins a continuation line onto the record being assembled
pub const CONTINUATION_DELIMITER: &str = ",";

/// Joins the leading number of a numbered boundary line onto the record being closed
pub const NUMBERED_HEAD_DELIMITER: &str = ", ";

/// Separates the leading number from the rest of a numbered boundary line
pub const HEAD_SEPARATOR: char = ' ';

// =============================================================================
// Environment Overrides
// =============================================================================

pub mod env_vars {
    pub const INPUT_PATH: &str = "CSO_INPUT_PATH";
    pub const OUTPUT_PATH: &str = "CSO_OUTPUT_PATH";
    pub const FLUSH_TRAILING: &str = "CSO_FLUSH_TRAILING";
    pub const SKIP_LEADING_EMPTY: &str = "CSO_SKIP_LEADING_EMPTY";
    pub const ECHO: &str = "CSO_ECHO";
}

// =============================================================================
// Logging
// =============================================================================

/// Crate target used for the default log filter
pub const LOG_TARGET: &str = "cso_outfalls";
