//! Segment header extraction for the results sheet
//!
//! The header row names the segments inside a fixed column window. Names are
//! trimmed and empty cells dropped; the resulting list defines the segment count of
//! the whole dataset.

use super::stats::Diagnostic;
use crate::constants::{HEADER_ROW, SEGMENT_BASE_COLUMN, SEGMENT_END_COLUMN, SEGMENT_STRIDE};

/// Segment names read from the header row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentHeader {
    /// Trimmed, non-empty segment names in column order
    pub names: Vec<String>,

    /// Header layout problems found while reading
    pub diagnostics: Vec<Diagnostic>,
}

impl SegmentHeader {
    /// Read the segment header from the raw table
    pub fn parse(table: &[Vec<String>]) -> Self {
        match table.get(HEADER_ROW) {
            Some(row) => Self::from_row(row),
            None => Self {
                names: Vec::new(),
                diagnostics: vec![Diagnostic::MissingHeaderRow { row: HEADER_ROW }],
            },
        }
    }

    /// Read the segment names from a header row
    pub fn from_row(row: &[String]) -> Self {
        let mut names = Vec::new();
        let mut diagnostics = Vec::new();

        let window_end = SEGMENT_END_COLUMN.min(row.len());
        for column in SEGMENT_BASE_COLUMN..window_end {
            let name = row[column].trim();
            if name.is_empty() {
                continue;
            }

            if (column - SEGMENT_BASE_COLUMN) % SEGMENT_STRIDE != 0 {
                diagnostics.push(Diagnostic::MisalignedSegmentHeader {
                    column,
                    name: name.to_string(),
                });
            }

            names.push(name.to_string());
        }

        Self { names, diagnostics }
    }

    /// Number of declared segments
    pub fn segment_count(&self) -> usize {
        self.names.len()
    }
}
