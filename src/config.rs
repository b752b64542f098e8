//! Configuration management and validation.
//!
//! Settings are layered from lowest to highest precedence: built-in defaults,
//! an optional TOML file, `CSO_*` environment variables, then command-line
//! arguments (applied by the CLI layer). With nothing overridden the
//! converter reads and writes the same fixed file names as the legacy tool.

use crate::app::services::line_reassembler::ReassemblyOptions;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level converter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub reassembly: ReassemblyConfig,
    pub output: OutputConfig,
}

/// Input and output file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Copied report text
    pub input_path: PathBuf,

    /// Reassembled records
    pub output_path: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Opt-in corrections to the legacy output format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReassemblyConfig {
    /// Write the record left over after the last boundary line
    pub flush_trailing: bool,

    /// Drop the empty record emitted when the input opens with a boundary line
    pub skip_leading_empty: bool,
}

/// Console output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print each record to stdout as well as writing the file
    pub echo_to_console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            echo_to_console: true,
        }
    }
}

impl Config {
    /// Default config file location, `<config dir>/cso-outfalls/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a configuration file, filling unspecified keys with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        Self::from_toml_str(&contents).map_err(|e| match e {
            Error::ConfigParsing {
                message, source, ..
            } => Error::config_parsing(path.display().to_string(), message, source),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            Error::config_parsing("<inline>", e.message().to_string(), e)
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize configuration: {}", e)))
    }

    /// Defaults, then `config_file` if given, then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `CSO_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(env_vars::INPUT_PATH) {
            debug!("{} overrides input path", env_vars::INPUT_PATH);
            self.paths.input_path = PathBuf::from(input);
        }
        if let Some(output) = lookup(env_vars::OUTPUT_PATH) {
            debug!("{} overrides output path", env_vars::OUTPUT_PATH);
            self.paths.output_path = PathBuf::from(output);
        }
        if let Some(value) = lookup(env_vars::FLUSH_TRAILING) {
            self.reassembly.flush_trailing = parse_env_bool(env_vars::FLUSH_TRAILING, &value)?;
        }
        if let Some(value) = lookup(env_vars::SKIP_LEADING_EMPTY) {
            self.reassembly.skip_leading_empty =
                parse_env_bool(env_vars::SKIP_LEADING_EMPTY, &value)?;
        }
        if let Some(value) = lookup(env_vars::ECHO) {
            self.output.echo_to_console = parse_env_bool(env_vars::ECHO, &value)?;
        }
        Ok(())
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.paths.input_path.as_os_str().is_empty() {
            return Err(Error::configuration("Input path must not be empty"));
        }

        if self.paths.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path must not be empty"));
        }

        if self.paths.input_path == self.paths.output_path {
            return Err(Error::configuration(format!(
                "Input and output paths are the same: {}",
                self.paths.input_path.display()
            )));
        }

        Ok(())
    }

    /// Options for the line reassembler
    pub fn reassembly_options(&self) -> ReassemblyOptions {
        ReassemblyOptions {
            flush_trailing: self.reassembly.flush_trailing,
            skip_leading_empty: self.reassembly.skip_leading_empty,
        }
    }
}

fn parse_env_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{} must be a boolean (true/false), got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config_matches_legacy_tool() {
        let config = Config::default();

        assert_eq!(config.paths.input_path, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.paths.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(!config.reassembly.flush_trailing);
        assert!(!config.reassembly.skip_leading_empty);
        assert!(config.output.echo_to_console);
        assert_eq!(config.reassembly_options(), ReassemblyOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [reassembly]
            flush_trailing = true
            "#,
        )
        .unwrap();

        assert!(config.reassembly.flush_trailing);
        assert!(!config.reassembly.skip_leading_empty);
        assert_eq!(config.paths, PathsConfig::default());
        assert!(config.output.echo_to_console);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = Config::from_toml_str("[reassembly]\nflush_trailing = \"maybe\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParsing { .. }));
    }

    #[test]
    fn test_from_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[paths\n").unwrap();

        match Config::from_file(&path).unwrap_err() {
            Error::ConfigParsing { path: reported, .. } => {
                assert_eq!(reported, path.display().to_string())
            }
            other => panic!("Expected ConfigParsing, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::from_file(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.paths.output_path = PathBuf::from("out/records.txt");
        config.reassembly.skip_leading_empty = true;
        config.output.echo_to_console = false;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("CSO_INPUT_PATH", "report.txt"),
            ("CSO_OUTPUT_PATH", "records.txt"),
            ("CSO_FLUSH_TRAILING", "yes"),
            ("CSO_SKIP_LEADING_EMPTY", "1"),
            ("CSO_ECHO", "off"),
        ]);

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.paths.input_path, PathBuf::from("report.txt"));
        assert_eq!(config.paths.output_path, PathBuf::from("records.txt"));
        assert!(config.reassembly.flush_trailing);
        assert!(config.reassembly.skip_leading_empty);
        assert!(!config.output.echo_to_console);
    }

    #[test]
    fn test_env_invalid_bool() {
        let vars = env(&[("CSO_FLUSH_TRAILING", "sometimes")]);

        let mut config = Config::default();
        let err = config.apply_env(|key| vars.get(key).cloned()).unwrap_err();
        assert!(err.to_string().contains("CSO_FLUSH_TRAILING"));
    }

    #[test]
    fn test_validate_rejects_same_paths() {
        let mut config = Config::default();
        config.paths.output_path = config.paths.input_path.clone();

        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_default_config_path_location() {
        match Config::default_config_path() {
            Ok(path) => assert!(path.ends_with("cso-outfalls/config.toml")),
            Err(err) => assert!(matches!(err, Error::Configuration { .. })),
        }
    }
}
