//! Segment statistics command implementation

use super::shared::{colored_rank, load_dataset, print_json, segment_display, setup_logging};
use crate::app::services::segment_stats::SegmentStats;
use crate::app::services::time_codec::format_segment_time;
use crate::cli::args::SegmentArgs;
use crate::{Error, Result};
use colored::*;
use tracing::debug;

/// Segment command runner
pub async fn run_segment(args: SegmentArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Segment arguments: {:?}", args);

    let result = load_dataset(&args.common).await?;
    let dataset = &result.dataset;

    let stats = SegmentStats::compute(dataset, args.index).ok_or_else(|| {
        Error::configuration(format!(
            "Segment {} does not exist (the sheet declares {} segments)",
            args.index,
            dataset.segment_count()
        ))
    })?;

    if args.common.is_json() {
        return print_json(&stats);
    }

    let kind = if stats.is_run { "run" } else { "station" };
    println!(
        "{} {}",
        stats.name.bright_green().bold(),
        format!("(segment {}, {})", stats.index, kind).dimmed()
    );
    println!("  Finishers: {}", stats.scored);
    println!(
        "  Fastest:   {}",
        stats
            .fastest
            .map_or_else(|| format_segment_time(0), |t| segment_display(t, stats.is_run))
    );
    println!(
        "  Slowest:   {}",
        stats
            .slowest
            .map_or_else(|| format_segment_time(0), |t| segment_display(t, stats.is_run))
    );

    for podium in &stats.podiums {
        println!();
        println!("  {}", podium.label.bold());
        if podium.entries.is_empty() {
            println!("    {}", "No results".dimmed());
        }
        for entry in &podium.entries {
            println!(
                "    {:>5}  {:<28} {}",
                colored_rank(entry.rank).to_string(),
                entry.name,
                segment_display(entry.time, stats.is_run)
            );
        }
    }

    Ok(())
}
