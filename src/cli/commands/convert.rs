//! Convert command implementation
//!
//! Reads the copied report, reassembles records, echoes them and writes the
//! output file. Nothing is written until the whole input has reassembled, so
//! a malformed line leaves no output file behind.

use super::shared::{ConversionStats, load_configuration, setup_logging};
use crate::app::adapters::filesystem::read_lines;
use crate::app::services::line_reassembler::LineReassembler;
use crate::app::services::record_writer::{RecordWriter, WritingStats};
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Convert command runner
///
/// 1. Set up logging and configuration
/// 2. Reassemble the input file
/// 3. Echo records to stdout and write the output file
/// 4. Optionally report a summary on stderr
pub fn run_convert(args: Args) -> Result<ConversionStats> {
    setup_logging(&args)?;

    info!("Starting CSO outfall converter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;

    if args.print_config {
        let rendered = config.to_toml()?;
        io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|e| Error::io("Failed to print configuration", e))?;
        return Ok(ConversionStats::default());
    }

    let stdout = io::stdout();
    let mut console = stdout.lock();
    let stats = convert(&config, args.dry_run, &mut console)?;

    if args.summary {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Run one conversion with an explicit console sink
pub fn convert<W: Write>(
    config: &Config,
    dry_run: bool,
    console: &mut W,
) -> Result<ConversionStats> {
    let start_time = Instant::now();
    let input_path = &config.paths.input_path;
    let output_path = &config.paths.output_path;

    info!("Reading {}", input_path.display());
    let lines = read_lines(input_path)?;

    let reassembler = LineReassembler::new(config.reassembly_options());
    let result = reassembler.reassemble(&lines)?;
    info!("{}", result.stats.summary());

    let writer = RecordWriter::new(config.output.echo_to_console);
    let writing = if dry_run {
        info!("Dry run: not writing {}", output_path.display());
        WritingStats {
            records_echoed: writer.echo(&result.records, console)?,
            ..WritingStats::default()
        }
    } else {
        writer.write_all(&result.records, output_path, console)?
    };

    Ok(ConversionStats {
        input_path: input_path.clone(),
        reassembly: result.stats,
        writing,
        dry_run,
        processing_time: start_time.elapsed(),
    })
}

/// Print a human-readable run summary to stderr
fn print_summary(stats: &ConversionStats) {
    let reassembly = &stats.reassembly;

    eprintln!("\n{}", "Conversion Summary".bright_green().bold());
    eprintln!(
        "  {} {}",
        "Input:".bright_cyan(),
        stats.input_path.display().to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        reassembly.lines_read.to_string().bright_white()
    );
    eprintln!(
        "  {} {} continuation, {} numbered boundary, {} plain boundary, {} empty",
        "Classified:".bright_cyan(),
        reassembly.continuation_lines,
        reassembly.numbered_boundaries,
        reassembly.plain_boundaries,
        reassembly.empty_lines
    );
    eprintln!(
        "  {} {}",
        "Records:".bright_cyan(),
        reassembly.records_emitted.to_string().bright_white().bold()
    );

    if reassembly.leading_empty_emitted {
        eprintln!("  {} first record is empty", "Note:".yellow());
    }

    if let Some(dropped) = &reassembly.dropped_trailing {
        eprintln!(
            "  {} trailing record '{}' was not written (use --flush-trailing)",
            "Dropped:".bright_red(),
            dropped.as_str().bright_red().bold()
        );
    }

    match &stats.writing.output_path {
        Some(path) => eprintln!(
            "  {} {} ({} bytes)",
            "Output:".bright_cyan(),
            path.display().to_string().bright_white(),
            stats.writing.bytes_written
        ),
        None if stats.dry_run => {
            eprintln!("  {} dry run, no file written", "Output:".bright_cyan())
        }
        None => {}
    }

    eprintln!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_millis().to_string().bright_white()
    );
}
