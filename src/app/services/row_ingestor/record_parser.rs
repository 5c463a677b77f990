//! Individual row parsing for the results sheet
//!
//! This module converts one bound sheet row into a participant, including the
//! total time, the per-segment times read at a fixed stride, and the data-quality
//! events found along the way.

use tracing::debug;

use super::stats::Diagnostic;
use crate::app::models::{Category, Participant, SegmentResult};
use crate::app::services::time_codec::{
    is_clean_segment_time, is_clean_total_time, parse_segment_time, parse_total_time,
};
use crate::constants::{
    MIN_ROW_CELLS, NAME_COLUMN, PARTICIPANT_ID_PREFIX, SEGMENT_BASE_COLUMN, SEGMENT_END_COLUMN,
    SEGMENT_STRIDE, SEGMENT_TIME_PLACEHOLDER, TOTAL_TIME_COLUMN, UNKNOWN_NAME,
};

/// A participant parsed from a row, with the non-fatal events of that row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub participant: Participant,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse a single bound row into a participant
///
/// Returns the skip reason when the row is absent or has too few cells. The id is
/// derived from `row_index`, the absolute position in the sheet.
pub fn parse_participant_row(
    row_index: usize,
    row: Option<&[String]>,
    category: &Category,
    segment_count: usize,
) -> Result<ParsedRow, Diagnostic> {
    let row = row.ok_or_else(|| Diagnostic::MissingRow {
        row: row_index,
        category_id: category.id.clone(),
    })?;

    if row.len() < MIN_ROW_CELLS {
        return Err(Diagnostic::ShortRow {
            row: row_index,
            cells: row.len(),
        });
    }

    let mut diagnostics = Vec::new();

    let name = match cell(row, NAME_COLUMN).trim() {
        "" => UNKNOWN_NAME,
        name => name,
    };

    let total_text = cell(row, TOTAL_TIME_COLUMN);
    if !is_clean_total_time(total_text) {
        diagnostics.push(unparseable(row_index, TOTAL_TIME_COLUMN, total_text));
    }
    let total_time = parse_total_time(total_text);

    let segments = parse_segments(row_index, row, segment_count, &mut diagnostics);

    diagnostics.extend(undeclared_segment_data(row_index, row, segment_count));

    let participant = Participant::new(
        format!("{}{}", PARTICIPANT_ID_PREFIX, row_index),
        name,
        category.id.clone(),
        segments,
        total_time,
    );

    debug!(
        "Parsed row {} for {}: {} ({} segments)",
        row_index,
        category.label,
        participant.name,
        participant.segments.len()
    );

    Ok(ParsedRow {
        participant,
        diagnostics,
    })
}

/// Parse the declared segment times; missing trailing cells read as no result
pub fn parse_segments(
    row_index: usize,
    row: &[String],
    segment_count: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<SegmentResult> {
    (0..segment_count)
        .map(|k| {
            let column = segment_column(k);
            let text = cell(row, column);
            if !is_clean_segment_time(text) {
                diagnostics.push(unparseable(row_index, column, text));
            }
            SegmentResult::new(parse_segment_time(text))
        })
        .collect()
}

/// Column of the time cell of segment `k`
pub fn segment_column(k: usize) -> usize {
    SEGMENT_BASE_COLUMN + k * SEGMENT_STRIDE
}

/// Times sitting in segment columns beyond the declared header
fn undeclared_segment_data(
    row_index: usize,
    row: &[String],
    segment_count: usize,
) -> Vec<Diagnostic> {
    (segment_column(segment_count)..SEGMENT_END_COLUMN)
        .step_by(SEGMENT_STRIDE)
        .filter_map(|column| {
            let value = cell(row, column).trim();
            if value.is_empty() || value == SEGMENT_TIME_PLACEHOLDER {
                None
            } else {
                Some(Diagnostic::UndeclaredSegmentData {
                    row: row_index,
                    column,
                    value: value.to_string(),
                })
            }
        })
        .collect()
}

fn unparseable(row: usize, column: usize, value: &str) -> Diagnostic {
    Diagnostic::UnparseableTime {
        row,
        column,
        value: value.trim().to_string(),
    }
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map_or("", String::as_str)
}
