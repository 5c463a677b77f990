//! Atomic dataset replacement and periodic refresh
//!
//! The current dataset lives behind a watch channel. A refresh fetches the raw
//! table, ingests it and publishes the new snapshot with a single send, so readers
//! see either the old dataset or the new one, never a mix. A failed fetch publishes
//! nothing and the previous snapshot stays current.

use crate::Result;
use crate::app::adapters::sheets::DataSource;
use crate::app::models::LeaderboardDataset;
use crate::app::services::row_ingestor::{IngestStats, RowIngestor};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// One published dataset with the statistics of the pass that built it
#[derive(Debug, Clone, Default)]
pub struct DatasetSnapshot {
    pub dataset: Arc<LeaderboardDataset>,
    pub stats: IngestStats,

    /// When the raw table was fetched; `None` before the first refresh
    pub fetched_at: Option<DateTime<Utc>>,

    /// Number of successful refreshes so far
    pub generation: u64,
}

/// Holder of the current dataset
#[derive(Debug)]
pub struct LeaderboardStore {
    ingestor: RowIngestor,
    sender: watch::Sender<Arc<DatasetSnapshot>>,
}

impl LeaderboardStore {
    /// Create a store holding an empty dataset
    pub fn new(ingestor: RowIngestor) -> Self {
        let (sender, _) = watch::channel(Arc::new(DatasetSnapshot::default()));
        Self { ingestor, sender }
    }

    /// Current snapshot
    pub fn current(&self) -> Arc<DatasetSnapshot> {
        Arc::clone(&self.sender.borrow())
    }

    /// Current dataset
    pub fn dataset(&self) -> Arc<LeaderboardDataset> {
        Arc::clone(&self.sender.borrow().dataset)
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Arc<DatasetSnapshot>> {
        self.sender.subscribe()
    }

    /// Ingest a raw table and publish the result
    ///
    /// The generation is read and bumped under the channel lock, so concurrent
    /// publishers always get distinct generations.
    pub fn publish(&self, table: &[Vec<String>]) -> Arc<DatasetSnapshot> {
        let result = self.ingestor.ingest(table);
        let mut snapshot = DatasetSnapshot {
            dataset: Arc::new(result.dataset),
            stats: result.stats,
            fetched_at: Some(Utc::now()),
            generation: 0,
        };

        let mut published: Arc<DatasetSnapshot> = Arc::default();
        self.sender.send_modify(|current| {
            snapshot.generation = current.generation + 1;
            published = Arc::new(snapshot);
            *current = Arc::clone(&published);
        });

        debug!("Published dataset generation {}", published.generation);
        published
    }

    /// Fetch, ingest and publish
    ///
    /// On a fetch error nothing is published and the error is returned.
    pub async fn refresh(&self, source: &dyn DataSource) -> Result<Arc<DatasetSnapshot>> {
        let table = match source.fetch_table().await {
            Ok(table) => table,
            Err(e) => {
                warn!(
                    "Refresh from {} failed, keeping generation {}: {}",
                    source.describe(),
                    self.sender.borrow().generation,
                    e
                );
                return Err(e);
            }
        };

        Ok(self.publish(&table))
    }
}

/// Counters of a finished refresh loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub refreshes: u64,
    pub failures: u64,
}

/// Refresh every `interval` until `cancel` fires
///
/// The first refresh happens immediately. Failures are logged and counted; the
/// loop keeps going with the previous dataset.
pub async fn run_refresh_loop(
    store: &LeaderboardStore,
    source: &dyn DataSource,
    interval: Duration,
    cancel: CancellationToken,
) -> RefreshSummary {
    let mut summary = RefreshSummary::default();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Refreshing from {} every {}s",
        source.describe(),
        interval.as_secs_f64()
    );

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Refresh loop cancelled");
                break;
            }
            _ = ticker.tick() => {
                match store.refresh(source).await {
                    Ok(snapshot) => {
                        summary.refreshes += 1;
                        info!(
                            "Generation {}: {} participants",
                            snapshot.generation,
                            snapshot.dataset.participants.len()
                        );
                    }
                    Err(_) => summary.failures += 1,
                }
            }
        }
    }

    summary
}
