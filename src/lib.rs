//! CSO Outfalls Library
//!
//! Reassembles the combined-sewer-overflow outfall listing that was copied out
//! of the annual CSO report as plain text. The copy breaks each outfall entry
//! across several physical lines; this library stitches them back together
//! into one comma-delimited record per line.
//!
//! This library provides tools for:
//! - Reading the copied report as an ordered sequence of raw lines
//! - Classifying each line by its leading and trailing characters
//! - Reassembling logical records with a single accumulator pass
//! - Writing the records to the output file and echoing them to the console
//! - Layered configuration (defaults, TOML file, environment, CLI)

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod line_reassembler;
        pub mod record_writer;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LineKind, OutputRecord, RawLine};
pub use config::Config;

/// Result type alias for the CSO outfall converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reading, reassembling and writing outfall records
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line starts with a digit and ends with a non-digit but has no space
    /// separating the leading number from the rest of the line
    #[error("Malformed line {line_number}: '{content}' starts with a digit but has no space separator")]
    MalformedLine { line_number: usize, content: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file '{path}': {message}")]
    ConfigParsing {
        path: String,
        message: String,
        #[source]
        source: toml::de::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed line error; `position` is the zero-based line index
    pub fn malformed_line(position: usize, content: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_number: position + 1,
            content: content.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration file parsing error
    pub fn config_parsing(
        path: impl Into<String>,
        message: impl Into<String>,
        source: toml::de::Error,
    ) -> Self {
        Self::ConfigParsing {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
