//! Participant command implementation

use super::shared::{colored_rank, load_dataset, print_json, segment_display, setup_logging};
use crate::app::models::{LeaderboardDataset, Participant, RankedView};
use crate::app::services::ranked_view::build_ranked_view;
use crate::app::services::time_codec::format_total_time;
use crate::cli::args::ParticipantArgs;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantReport<'a> {
    participant: &'a Participant,
    ranks: &'a RankedView,
}

/// Participant command runner
///
/// An id that is not in the dataset is an error, so the process exits non-zero.
pub async fn run_participant(args: ParticipantArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Participant arguments: {:?}", args);

    let result = load_dataset(&args.common).await?;
    let dataset = &result.dataset;

    let id = args.participant_id();
    let participant = dataset.participant(&id);
    let (Some(participant), Some(view)) = (participant, build_ranked_view(dataset, &id)) else {
        return Err(Error::participant_not_found(id));
    };

    if args.common.is_json() {
        print_json(&ParticipantReport {
            participant,
            ranks: &view,
        })
    } else {
        print_report(dataset, participant, &view);
        Ok(())
    }
}

fn print_report(dataset: &LeaderboardDataset, participant: &Participant, view: &RankedView) {
    let label = dataset
        .category(&participant.category_id)
        .map_or(participant.category_id.as_str(), |c| c.label.as_str());

    println!("{}", participant.name.bright_green().bold());
    println!("  Id:        {}", participant.id);
    println!("  Category:  {}", label);
    println!("  Total:     {}", format_total_time(participant.total_time));
    println!(
        "  Overall:   {} of {}",
        colored_rank(view.overall_rank),
        view.overall_pool_size
    );
    println!(
        "  Category:  {} of {}",
        colored_rank(view.category_rank),
        view.category_pool_size
    );

    if view.per_segment.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        format!(
            "  {:<24} {:>22} {:>8} {:>10}",
            "Segment", "Time", "Global", "Category"
        )
        .bright_green()
        .bold()
    );
    for (name, segment) in dataset.segment_names.iter().zip(&view.per_segment) {
        let is_run = name.to_lowercase().contains("run");
        println!(
            "  {:<24} {:>22} {:>8} {:>10}",
            name,
            segment_display(segment.time, is_run),
            colored_rank(segment.global_rank).to_string(),
            format!(
                "{}/{}",
                colored_rank(segment.category_rank),
                segment.category_pool_size
            )
        );
    }
}
