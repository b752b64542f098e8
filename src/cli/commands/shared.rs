//! Shared components for CLI commands
//!
//! Run statistics, logging setup and layered configuration loading.

use crate::app::services::line_reassembler::ReassemblyStats;
use crate::app::services::record_writer::WritingStats;
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Statistics for one converter run
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Input file that was read
    pub input_path: PathBuf,
    /// Classification and record counts from the reassembly pass
    pub reassembly: ReassemblyStats,
    /// Output counts; `output_path` is `None` on a dry run
    pub writing: WritingStats,
    /// Output file was deliberately not written
    pub dry_run: bool,
    /// Wall-clock time for the run
    pub processing_time: Duration,
}

impl ConversionStats {
    /// Records produced by the reassembly pass
    pub fn records(&self) -> usize {
        self.reassembly.records_emitted
    }
}

/// Set up structured logging on stderr so stdout carries only records
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG wins over the verbosity flags; -q is just the "error" level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;

    args.apply_overrides(&mut config);

    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}
