//! Command-line argument definitions for the CSO outfall converter
//!
//! This module defines the CLI interface using the clap derive API. Every
//! argument is optional: run bare, the converter behaves like the legacy
//! fixed-path tool.

use crate::config::Config;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the CSO outfall converter
///
/// Reassembles the outfall listing copied out of the CSO report into one
/// comma-delimited record per line.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "cso-outfalls",
    version,
    about = "Reassemble the copied CSO outfall listing into one comma-delimited record per line",
    long_about = "Reads the CSO outfall listing copied from the annual CSO report, where each \
                  outfall entry is broken across several lines, and stitches the lines back \
                  together. A line ending in a non-digit closes the current record. Records are \
                  printed to stdout and written to the output file."
)]
pub struct Args {
    /// Input report text
    ///
    /// Defaults to "CSO outfalls data copied from 2017 CSO Report.txt" in the
    /// current directory.
    #[arg(value_name = "INPUT", help = "Input report text file")]
    pub input_path: Option<PathBuf>,

    /// Output file for reassembled records
    ///
    /// Defaults to "CSO outfalls2.txt" in the current directory. Replaced if it exists.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file for reassembled records"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for ~/.config/cso-outfalls/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Write the record left after the last boundary line
    ///
    /// The legacy converter silently drops it.
    #[arg(
        long = "flush-trailing",
        help = "Write the final record instead of dropping it"
    )]
    pub flush_trailing: bool,

    /// Skip the empty record emitted when the input starts with a boundary line
    #[arg(
        long = "skip-leading-empty",
        help = "Skip the empty record produced by a leading boundary line"
    )]
    pub skip_leading_empty: bool,

    /// Do not print records to stdout
    #[arg(long = "no-echo", help = "Do not print records to stdout")]
    pub no_echo: bool,

    /// Reassemble and print without writing the output file
    #[arg(
        long = "dry-run",
        help = "Reassemble and print records without writing the output file"
    )]
    pub dry_run: bool,

    /// Print a run summary to stderr when finished
    #[arg(long = "summary", help = "Print a run summary to stderr")]
    pub summary: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(
        long = "print-config",
        help = "Print the effective configuration and exit"
    )]
    pub print_config: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress everything but errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only log errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let (Some(input), Some(output)) = (&self.input_path, &self.output_path) {
            if input == output {
                return Err(Error::configuration(format!(
                    "Input and output must be different files: {}",
                    input.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply explicitly given arguments on top of `config`
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(input_path) = &self.input_path {
            config.paths.input_path = input_path.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.paths.output_path = output_path.clone();
        }
        if self.flush_trailing {
            config.reassembly.flush_trailing = true;
        }
        if self.skip_leading_empty {
            config.reassembly.skip_leading_empty = true;
        }
        if self.no_echo {
            config.output.echo_to_console = false;
        }
    }

    /// Log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation() {
        let args = Args::try_parse_from(["cso-outfalls"]).unwrap();

        assert!(args.input_path.is_none());
        assert!(args.output_path.is_none());
        assert!(!args.flush_trailing);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_full_invocation() {
        let args = Args::try_parse_from([
            "cso-outfalls",
            "report.txt",
            "-o",
            "records.txt",
            "--flush-trailing",
            "--skip-leading-empty",
            "--no-echo",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.input_path, Some(PathBuf::from("report.txt")));
        assert_eq!(args.output_path, Some(PathBuf::from("records.txt")));
        assert_eq!(args.get_log_level(), "debug");

        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.paths.input_path, PathBuf::from("report.txt"));
        assert_eq!(config.paths.output_path, PathBuf::from("records.txt"));
        assert!(config.reassembly.flush_trailing);
        assert!(config.reassembly.skip_leading_empty);
        assert!(!config.output.echo_to_console);
    }

    #[test]
    fn test_unset_flags_keep_config_values() {
        let args = Args::try_parse_from(["cso-outfalls"]).unwrap();

        let mut config = Config::default();
        config.reassembly.flush_trailing = true;
        config.output.echo_to_console = false;
        args.apply_overrides(&mut config);

        assert!(config.reassembly.flush_trailing);
        assert!(!config.output.echo_to_console);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["cso-outfalls", "-q", "-v"]).is_err());

        let args = Args::try_parse_from(["cso-outfalls", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_validate_same_input_output() {
        let args = Args::try_parse_from(["cso-outfalls", "a.txt", "-o", "a.txt"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_missing_config_file() {
        let args =
            Args::try_parse_from(["cso-outfalls", "--config", "/nonexistent/cso.toml"]).unwrap();
        assert!(matches!(
            args.validate(),
            Err(Error::Configuration { .. })
        ));
    }
}
