//! Leaderboard command implementation
//!
//! Prints the filtered and sorted results table. Ranks always come from the whole
//! dataset, so a filtered table still shows each participant's real position.

use super::shared::{colored_rank, load_dataset, print_json, setup_logging};
use crate::app::models::LeaderboardDataset;
use crate::app::services::leaderboard_query::LeaderboardRow;
use crate::app::services::time_codec::{format_segment_time, format_total_time};
use crate::cli::args::LeaderboardArgs;
use crate::{Error, Result};
use colored::*;
use tracing::{debug, info};

/// Leaderboard command runner
pub async fn run_leaderboard(args: LeaderboardArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Leaderboard arguments: {:?}", args);

    let result = load_dataset(&args.common).await?;
    let dataset = &result.dataset;

    if let Some(category) = &args.category {
        if dataset.category(category).is_none() {
            return Err(Error::unknown_category(category.clone()));
        }
    }

    let mut rows = args.query().run(dataset);
    info!(
        "{} of {} participants match the query",
        rows.len(),
        dataset.participants.len()
    );
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    if args.common.is_json() {
        print_json(&rows)
    } else {
        print_table(dataset, &rows);
        Ok(())
    }
}

fn print_table(dataset: &LeaderboardDataset, rows: &[LeaderboardRow<'_>]) {
    if rows.is_empty() {
        println!("{}", "No participants match".yellow());
        return;
    }

    let mut header = format!(
        "{:>6} {:>6}  {:<28} {:<18} {:>9}",
        "Pos", "Cat", "Name", "Category", "Total"
    );
    for name in &dataset.segment_names {
        header.push_str(&format!(" {:>8}", truncate(name, 8)));
    }
    println!("{}", header.bright_green().bold());

    for row in rows {
        let participant = row.participant;
        let label = dataset
            .category(&participant.category_id)
            .map_or(participant.category_id.as_str(), |c| c.label.as_str());

        let mut line = format!(
            "{:>6} {:>6}  {:<28} {:<18} {:>9}",
            colored_rank(row.overall_rank).to_string(),
            colored_rank(row.category_rank).to_string(),
            truncate(&participant.name, 28),
            truncate(label, 18),
            format_total_time(participant.total_time)
        );
        for segment in &participant.segments {
            line.push_str(&format!(" {:>8}", format_segment_time(segment.time)));
        }
        println!("{}", line);
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
