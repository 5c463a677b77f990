//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, data-source selection and output helpers
//! used by every command.

use crate::app::adapters::sheets::{DataSource, FileDataSource, SheetsDataSource};
use crate::app::models::{Rank, Seconds};
use crate::app::services::display::{format_pace, format_rank};
use crate::app::services::row_ingestor::{IngestResult, IngestStats, RowIngestor};
use crate::app::services::time_codec::format_segment_time;
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Set up structured logging for a command
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hybrid_leaderboard={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configuration named by the flags, or the default one
pub fn load_config(args: &CommonArgs) -> Result<Config> {
    let config = Config::load(args.config_file.as_deref())?;
    debug!("Configuration: {:?}", config);
    Ok(config)
}

/// Data source selected by the flags
///
/// A local export wins over the configured sheet; the sheet source validates its
/// credentials here, before anything is fetched.
pub fn data_source(args: &CommonArgs, config: &Config) -> Result<Box<dyn DataSource>> {
    match &args.input {
        Some(path) => {
            info!("Reading results from {}", path.display());
            Ok(Box::new(FileDataSource::new(path)))
        }
        None => Ok(Box::new(SheetsDataSource::new(config.source.clone())?)),
    }
}

/// Fetch the table once and ingest it
pub async fn load_dataset(args: &CommonArgs) -> Result<IngestResult> {
    let config = load_config(args)?;
    let source = data_source(args, &config)?;
    let table = source.fetch_table().await?;

    let result = RowIngestor::competition()?.ingest(&table);
    report_ingest(&result.stats);
    Ok(result)
}

/// Log the data-quality summary of an ingestion pass
pub fn report_ingest(stats: &IngestStats) {
    if stats.rows_skipped > 0 {
        warn!(
            "{} of {} bound rows skipped: {:?}",
            stats.rows_skipped,
            stats.rows_scanned,
            stats.skipped_rows()
        );
    }
    if stats.has_data_warnings() {
        info!(
            "{} data-quality diagnostics (use -vv to list them)",
            stats.diagnostics.iter().filter(|d| !d.is_skip()).count()
        );
    }
    for diagnostic in &stats.diagnostics {
        debug!("{}", diagnostic);
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization("Failed to render JSON output", e))?;
    println!("{}", text);
    Ok(())
}

/// Rank with podium colors
pub fn colored_rank(rank: Rank) -> ColoredString {
    let text = format_rank(rank);
    match rank {
        1 => text.bright_yellow().bold(),
        2 => text.bright_white().bold(),
        3 => text.truecolor(205, 127, 50).bold(),
        0 => text.dimmed(),
        _ => text.normal(),
    }
}

/// Segment time, as pace for run segments
pub fn segment_display(time: Seconds, is_run: bool) -> String {
    if is_run && time > 0 {
        format!("{} ({})", format_segment_time(time), format_pace(time))
    } else {
        format_segment_time(time)
    }
}
