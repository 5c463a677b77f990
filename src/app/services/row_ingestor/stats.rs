//! Ingestion statistics and result structures
//!
//! Data-quality problems found in the sheet are collected here as diagnostics
//! instead of being returned as errors.

use crate::app::models::LeaderboardDataset;
use serde::Serialize;
use std::fmt;

/// Ingestion result with the dataset and basic statistics
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// The rebuilt dataset
    pub dataset: LeaderboardDataset,

    /// Statistics and diagnostics of this ingestion pass
    pub stats: IngestStats,
}

/// A data-quality event found while ingesting the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The header row is absent from the table
    MissingHeaderRow { row: usize },

    /// A header name sits in a rank column instead of a time column
    MisalignedSegmentHeader { column: usize, name: String },

    /// A bound row is beyond the end of the table
    MissingRow { row: usize, category_id: String },

    /// A bound row has too few cells to be a participant
    ShortRow { row: usize, cells: usize },

    /// A time cell did not have the expected shape and was read leniently
    UnparseableTime {
        row: usize,
        column: usize,
        value: String,
    },

    /// A time cell holds data in a segment column the header does not declare
    UndeclaredSegmentData {
        row: usize,
        column: usize,
        value: String,
    },
}

impl Diagnostic {
    /// Row the diagnostic refers to, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            Diagnostic::MissingHeaderRow { row }
            | Diagnostic::MissingRow { row, .. }
            | Diagnostic::ShortRow { row, .. }
            | Diagnostic::UnparseableTime { row, .. }
            | Diagnostic::UndeclaredSegmentData { row, .. } => Some(*row),
            Diagnostic::MisalignedSegmentHeader { .. } => None,
        }
    }

    /// Whether the diagnostic caused a row to be skipped
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Diagnostic::MissingRow { .. } | Diagnostic::ShortRow { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingHeaderRow { row } => {
                write!(f, "Header row {} is missing", row)
            }
            Diagnostic::MisalignedSegmentHeader { column, name } => {
                write!(
                    f,
                    "Segment header '{}' at column {} is not on a time column",
                    name, column
                )
            }
            Diagnostic::MissingRow { row, category_id } => {
                write!(f, "Row {} ({}) is missing", row, category_id)
            }
            Diagnostic::ShortRow { row, cells } => {
                write!(f, "Row {} has only {} cells", row, cells)
            }
            Diagnostic::UnparseableTime { row, column, value } => {
                write!(
                    f,
                    "Row {} column {}: unparseable time '{}'",
                    row, column, value
                )
            }
            Diagnostic::UndeclaredSegmentData { row, column, value } => {
                write!(
                    f,
                    "Row {} column {}: '{}' in a segment column without a header",
                    row, column, value
                )
            }
        }
    }
}

/// Simple ingestion statistics
#[derive(Debug, Clone, Serialize)]
pub struct IngestStats {
    /// Number of bound rows examined
    pub rows_scanned: usize,

    /// Number of participants produced
    pub participants_ingested: usize,

    /// Number of bound rows skipped as malformed
    pub rows_skipped: usize,

    /// Data-quality events, in discovery order
    pub diagnostics: Vec<Diagnostic>,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_scanned: 0,
            participants_ingested: 0,
            rows_skipped: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_scanned == 0 {
            0.0
        } else {
            (self.participants_ingested as f64 / self.rows_scanned as f64) * 100.0
        }
    }

    /// Rows that were skipped, in discovery order
    pub fn skipped_rows(&self) -> Vec<usize> {
        self.diagnostics
            .iter()
            .filter(|d| d.is_skip())
            .filter_map(Diagnostic::row)
            .collect()
    }

    /// Whether any non-skip data-quality event was recorded
    pub fn has_data_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_skip())
    }
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}
