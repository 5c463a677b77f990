//! Tests for single-row parsing

use super::*;
use crate::app::services::category_registry::CategoryRegistry;
use crate::app::services::row_ingestor::Diagnostic;
use crate::app::services::row_ingestor::record_parser::{parse_participant_row, segment_column};
use crate::app::services::time_codec::format_total_time;

fn rx() -> crate::app::models::Category {
    CategoryRegistry::competition()
        .get(category_ids::RX_MALE)
        .unwrap()
        .clone()
}

#[test]
fn test_end_to_end_row() {
    let cells = row(&["", "Jane Doe", "01:30:45", "2", "12:30", "", "05:10", ""]);
    let parsed = parse_participant_row(64, Some(cells.as_slice()), &rx(), 2).unwrap();

    let p = &parsed.participant;
    assert_eq!(p.id, "p64");
    assert_eq!(p.name, "Jane Doe");
    assert_eq!(p.category_id, category_ids::RX_MALE);
    assert_eq!(p.total_time, 5445);
    assert_eq!(
        p.segments.iter().map(|s| s.time).collect::<Vec<_>>(),
        vec![750, 310]
    );
    assert_eq!(format_total_time(p.total_time), "01:30:45");
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_short_row_is_skipped() {
    let cells = row(&["", "Broken"]);
    let result = parse_participant_row(10, Some(cells.as_slice()), &rx(), 2);
    assert_eq!(result, Err(Diagnostic::ShortRow { row: 10, cells: 2 }));
}

#[test]
fn test_absent_row_is_skipped() {
    let result = parse_participant_row(70, None, &rx(), 2);
    assert_eq!(
        result,
        Err(Diagnostic::MissingRow {
            row: 70,
            category_id: category_ids::RX_MALE.to_string()
        })
    );
}

#[test]
fn test_empty_name_uses_placeholder() {
    let cells = row(&["", "  ", "00:10:00", ""]);
    let parsed = parse_participant_row(5, Some(cells.as_slice()), &rx(), 0).unwrap();
    assert_eq!(parsed.participant.name, "Unknown");
}

#[test]
fn test_missing_trailing_segments_read_as_no_result() {
    let cells = row(&["", "Ana", "00:10:00", "1", "03:00"]);
    let parsed = parse_participant_row(5, Some(cells.as_slice()), &rx(), 3).unwrap();

    let times: Vec<_> = parsed.participant.segments.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![180, 0, 0]);
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn test_unparseable_times_are_reported() {
    let cells = row(&["", "Ana", "DNF", "", "DNS", "", "04:1x", ""]);
    let parsed = parse_participant_row(5, Some(cells.as_slice()), &rx(), 2).unwrap();

    assert_eq!(parsed.participant.total_time, 0);
    assert_eq!(parsed.participant.segment_time(0), 0);
    assert_eq!(parsed.participant.segment_time(1), 240);
    assert_eq!(
        parsed.diagnostics,
        vec![
            Diagnostic::UnparseableTime {
                row: 5,
                column: 2,
                value: "DNF".to_string()
            },
            Diagnostic::UnparseableTime {
                row: 5,
                column: 4,
                value: "DNS".to_string()
            },
            Diagnostic::UnparseableTime {
                row: 5,
                column: 6,
                value: "04:1x".to_string()
            },
        ]
    );
}

#[test]
fn test_undeclared_segment_data_is_reported_not_padded() {
    let cells = participant_row("Ana", "00:10:00", &["03:00", "04:00", "--:--"]);
    let parsed = parse_participant_row(5, Some(cells.as_slice()), &rx(), 1).unwrap();

    assert_eq!(parsed.participant.segments.len(), 1);
    assert_eq!(
        parsed.diagnostics,
        vec![Diagnostic::UndeclaredSegmentData {
            row: 5,
            column: 6,
            value: "04:00".to_string()
        }]
    );
}

#[test]
fn test_sheet_rank_column_is_ignored() {
    let cells = row(&["", "Ana", "00:10:00", "99", "03:00", "7"]);
    let parsed = parse_participant_row(5, Some(cells.as_slice()), &rx(), 1).unwrap();
    assert_eq!(parsed.participant.segment_time(0), 180);
    assert_eq!(parsed.participant.total_time, 600);
}

#[test]
fn test_segment_columns_follow_stride() {
    assert_eq!(segment_column(0), 4);
    assert_eq!(segment_column(1), 6);
    assert_eq!(segment_column(9), 22);
}
