//! Core row ingestor implementation
//!
//! This module walks the category row bindings over the raw table, coordinating
//! header extraction and per-row parsing into a complete dataset.

use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::header::SegmentHeader;
use super::record_parser::parse_participant_row;
use super::stats::{IngestResult, IngestStats};
use crate::app::models::LeaderboardDataset;
use crate::app::services::category_registry::{CategoryBinding, CategoryRegistry};
use crate::{Error, Result};

/// Ingestor for the fixed-layout results sheet
///
/// The ingestor holds only its layout (registry and row bindings); every call to
/// [`RowIngestor::ingest`] builds a fresh dataset from its input alone.
#[derive(Debug, Clone)]
pub struct RowIngestor {
    registry: CategoryRegistry,
    bindings: Vec<CategoryBinding>,
}

impl RowIngestor {
    /// Create an ingestor from a registry and row bindings
    ///
    /// Category ids must be unique in the registry, and bindings must reference
    /// registry categories and cover disjoint row ranges.
    pub fn new(registry: CategoryRegistry, bindings: Vec<CategoryBinding>) -> Result<Self> {
        let mut seen = HashSet::new();
        for category in registry.categories() {
            if !seen.insert(category.id.as_str()) {
                return Err(Error::configuration(format!(
                    "Category id {} is registered more than once",
                    category.id
                )));
            }
        }

        for binding in &bindings {
            if binding.start_row > binding.end_row {
                return Err(Error::configuration(format!(
                    "Binding for {} has start row {} after end row {}",
                    binding.category.id, binding.start_row, binding.end_row
                )));
            }
            if !registry.contains(&binding.category.id) {
                return Err(Error::unknown_category(binding.category.id.clone()));
            }
        }

        for (i, a) in bindings.iter().enumerate() {
            for b in &bindings[i + 1..] {
                if a.contains_row(b.start_row) || b.contains_row(a.start_row) {
                    return Err(Error::configuration(format!(
                        "Row ranges of {} ({}..={}) and {} ({}..={}) overlap",
                        a.category.id,
                        a.start_row,
                        a.end_row,
                        b.category.id,
                        b.start_row,
                        b.end_row
                    )));
                }
            }
        }

        Ok(Self { registry, bindings })
    }

    /// Ingestor for the competition sheet layout
    pub fn competition() -> Result<Self> {
        let registry = CategoryRegistry::competition();
        let bindings = registry.competition_bindings()?;
        Self::new(registry, bindings)
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn bindings(&self) -> &[CategoryBinding] {
        &self.bindings
    }

    /// Ingest the raw table into a dataset with statistics
    ///
    /// Participants come out in binding order, then sheet row order. An empty or
    /// malformed table yields an empty dataset, never an error.
    pub fn ingest(&self, table: &[Vec<String>]) -> IngestResult {
        info!("Ingesting results table with {} rows", table.len());

        let mut stats = IngestStats::new();
        let mut participants = Vec::new();

        let header = SegmentHeader::parse(table);
        let segment_count = header.segment_count();
        debug!("Segment header: {:?}", header.names);
        for diagnostic in &header.diagnostics {
            warn!("{}", diagnostic);
        }
        stats.diagnostics.extend(header.diagnostics);

        for binding in &self.bindings {
            for row_index in binding.rows() {
                stats.rows_scanned += 1;

                let row = table.get(row_index).map(Vec::as_slice);
                match parse_participant_row(row_index, row, &binding.category, segment_count) {
                    Ok(parsed) => {
                        for diagnostic in &parsed.diagnostics {
                            debug!("{}", diagnostic);
                        }
                        stats.diagnostics.extend(parsed.diagnostics);
                        participants.push(parsed.participant);
                        stats.participants_ingested += 1;
                    }
                    Err(skip) => {
                        debug!("Skipping row: {}", skip);
                        stats.rows_skipped += 1;
                        stats.diagnostics.push(skip);
                    }
                }
            }
        }

        let dataset = LeaderboardDataset::new(
            participants,
            self.registry.categories().to_vec(),
            header.names,
        );

        info!(
            "Ingested {} participants from {} rows ({} skipped, {:.1}% ingested, {} segments)",
            stats.participants_ingested,
            stats.rows_scanned,
            stats.rows_skipped,
            stats.success_rate(),
            dataset.segment_count()
        );

        IngestResult { dataset, stats }
    }
}
