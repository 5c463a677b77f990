//! Row ingestor for the competition results sheet
//!
//! Converts the raw 2-D string table into participant records. The sheet layout is
//! fixed: segment names sit in a header row, and each category occupies a declared
//! range of rows. Malformed rows are skipped and recorded as diagnostics; nothing in
//! the table content can make ingestion fail.
//!
//! ## Architecture
//!
//! - [`parser`] - Ingestion orchestration over the category row bindings
//! - [`header`] - Segment header extraction from the header row
//! - [`record_parser`] - Conversion of a single row into a participant
//! - [`stats`] - Ingestion statistics, diagnostics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use hybrid_leaderboard::app::services::row_ingestor::RowIngestor;
//!
//! # fn example(table: Vec<Vec<String>>) -> hybrid_leaderboard::Result<()> {
//! let ingestor = RowIngestor::competition()?;
//! let result = ingestor.ingest(&table);
//!
//! println!("Ingested {} participants from {} rows",
//!          result.stats.participants_ingested,
//!          result.stats.rows_scanned);
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::SegmentHeader;
pub use parser::RowIngestor;
pub use stats::{Diagnostic, IngestResult, IngestStats};
