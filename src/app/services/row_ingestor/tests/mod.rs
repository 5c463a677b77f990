//! Test utilities and fixtures for row ingestor testing
//!
//! This module provides sheet builders and small ingestors used across the
//! different test modules.

use crate::app::models::RawTable;
use crate::app::services::category_registry::{CategoryBinding, CategoryRegistry};
use crate::app::services::row_ingestor::RowIngestor;
use crate::constants::category_ids;

mod record_parser_tests;

/// Build a row from string literals
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Header row declaring the given segment names on the time columns
pub fn header_row(names: &[&str]) -> Vec<String> {
    let mut cells = vec![String::new(); 4];
    for name in names {
        cells.push(name.to_string());
        cells.push(String::new());
    }
    cells
}

/// Participant row with total time and segment times on the time columns
pub fn participant_row(name: &str, total: &str, segments: &[&str]) -> Vec<String> {
    let mut cells = row(&["", name, total, ""]);
    for time in segments {
        cells.push(time.to_string());
        cells.push(String::new());
    }
    cells
}

/// Sheet with the given rows placed at absolute indices; gaps are empty rows
pub fn sheet(header: Vec<String>, rows: Vec<(usize, Vec<String>)>) -> RawTable {
    let last = rows.iter().map(|(index, _)| *index).max().unwrap_or(1).max(1);
    let mut table: RawTable = vec![Vec::new(); last + 1];
    table[0] = row(&["Competición Híbrida"]);
    table[1] = header;
    for (index, cells) in rows {
        table[index] = cells;
    }
    table
}

/// Ingestor with two small bindings: rows 2..=4 RX Masculino, rows 6..=8 OPEN Femenino
pub fn create_small_ingestor() -> RowIngestor {
    let registry = CategoryRegistry::competition();
    let rx = registry.get(category_ids::RX_MALE).unwrap().clone();
    let open = registry.get(category_ids::OPEN_FEMALE).unwrap().clone();
    RowIngestor::new(
        registry,
        vec![
            CategoryBinding::new(2, 4, rx),
            CategoryBinding::new(6, 8, open),
        ],
    )
    .unwrap()
}

/// Small sheet matching [`create_small_ingestor`], with one short row at index 3
pub fn create_small_sheet() -> RawTable {
    sheet(
        header_row(&["Run 1", "Row"]),
        vec![
            (2, participant_row("Ana", "00:20:00", &["05:00", "06:00"])),
            (3, row(&["", "Broken"])),
            (4, participant_row("Luis", "00:19:00", &["04:30", "--:--"])),
            (6, participant_row("Marta", "00:25:10", &["06:10", "07:00"])),
            (7, participant_row("", "--:--:--", &["--:--", "--:--"])),
            (8, participant_row("Sara", "00:22:00", &["05:30", "06:30"])),
        ],
    )
}
