//! Watch command implementation
//!
//! Keeps refreshing the dataset until cancelled, printing one summary line per
//! published generation.

use super::shared::{data_source, load_config, report_ingest, setup_logging};
use crate::app::services::refresh::{LeaderboardStore, run_refresh_loop};
use crate::app::services::row_ingestor::RowIngestor;
use crate::cli::args::WatchArgs;
use crate::{Error, Result};
use colored::*;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Watch command runner
pub async fn run_watch(args: WatchArgs, cancel: CancellationToken) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Watch arguments: {:?}", args);

    let mut config = load_config(&args.common)?;
    if let Some(interval) = args.interval_secs {
        config.refresh.interval_secs = interval;
    }
    config.refresh.validate()?;

    let source = data_source(&args.common, &config)?;
    let store = LeaderboardStore::new(RowIngestor::competition()?);
    let mut updates = store.subscribe();
    let json = args.common.is_json();

    let printer = async {
        while updates.changed().await.is_ok() {
            let snapshot = Arc::clone(&updates.borrow_and_update());
            report_ingest(&snapshot.stats);

            let fetched = snapshot
                .fetched_at
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default();
            if json {
                let line = serde_json::json!({
                    "generation": snapshot.generation,
                    "fetchedAt": snapshot.fetched_at,
                    "participants": snapshot.dataset.participants.len(),
                    "skipped": snapshot.stats.rows_skipped,
                });
                println!("{}", line);
            } else {
                println!(
                    "[{}] generation {}: {} participants, {} segments, {} rows skipped",
                    fetched.dimmed(),
                    snapshot.generation.to_string().bright_white().bold(),
                    snapshot.dataset.participants.len(),
                    snapshot.dataset.segment_count(),
                    snapshot.stats.rows_skipped
                );
            }
        }
    };

    let refresher = run_refresh_loop(
        &store,
        source.as_ref(),
        config.refresh.interval(),
        cancel.clone(),
    );

    // The printer only ends when the store is dropped, so the refresher decides
    let summary = tokio::select! {
        summary = refresher => summary,
        _ = printer => return Err(Error::processing_interrupted("update channel closed")),
    };

    info!(
        "Watch finished: {} refreshes, {} failures",
        summary.refreshes, summary.failures
    );
    Ok(())
}
