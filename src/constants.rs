//! Application constants for the hybrid leaderboard
//!
//! The sheet layout of the competition is fixed: header row, column offsets and
//! category row ranges live here. A change in the published sheet means changing
//! these constants, not runtime configuration.

// =============================================================================
// Sheet Layout
// =============================================================================

/// Row (0-indexed) holding the segment header names
pub const HEADER_ROW: usize = 1;

/// First column (0-indexed) of the segment cell groups
pub const SEGMENT_BASE_COLUMN: usize = 4;

/// Width of one segment cell group (time column followed by a rank column)
pub const SEGMENT_STRIDE: usize = 2;

/// Maximum number of segments the sheet can hold
pub const MAX_SEGMENTS: usize = 10;

/// One past the last column (0-indexed) of the segment header window
pub const SEGMENT_END_COLUMN: usize = SEGMENT_BASE_COLUMN + MAX_SEGMENTS * SEGMENT_STRIDE;

/// Column holding the participant or team name
pub const NAME_COLUMN: usize = 1;

/// Column holding the aggregate "HH:MM:SS" time
pub const TOTAL_TIME_COLUMN: usize = 2;

/// Rows with fewer cells than this are malformed
pub const MIN_ROW_CELLS: usize = 4;

/// Name used when the name cell is empty
pub const UNKNOWN_NAME: &str = "Unknown";

/// Prefix of participant ids; the absolute row index follows
pub const PARTICIPANT_ID_PREFIX: &str = "p";

// =============================================================================
// Time Placeholders
// =============================================================================

/// Segment time rendered for "no result"
pub const SEGMENT_TIME_PLACEHOLDER: &str = "--:--";

/// Total time rendered for "no result"
pub const TOTAL_TIME_PLACEHOLDER: &str = "--:--:--";

/// Rank rendered for "unranked"
pub const RANK_PLACEHOLDER: &str = "-";

/// Distance of one run segment in kilometres, used for pace display
pub const RUN_SEGMENT_KM: f64 = 1.6;

/// Podium depth for per-segment statistics
pub const PODIUM_SIZE: u32 = 3;

// =============================================================================
// Categories
// =============================================================================

/// Category identifiers of the competition
pub mod category_ids {
    pub const SCALED_FEMALE: &str = "scaled-femenino";
    pub const SCALED_MALE: &str = "scaled-masculino";
    pub const OPEN_FEMALE: &str = "open-femenino";
    pub const OPEN_MALE: &str = "open-masculino";
    pub const RX_MALE: &str = "rx-masculino";
}

/// Row-range binding: (first row, last row inclusive, category id), 0-indexed
pub type RowBinding = (usize, usize, &'static str);

/// Category row ranges of the results sheet, in display order
pub const CATEGORY_ROW_BINDINGS: &[RowBinding] = &[
    (3, 12, category_ids::SCALED_FEMALE),
    (16, 19, category_ids::SCALED_MALE),
    (30, 38, category_ids::OPEN_FEMALE),
    (43, 58, category_ids::OPEN_MALE),
    (63, 74, category_ids::RX_MALE),
];

// =============================================================================
// Data Source
// =============================================================================

/// Google Sheets values endpoint
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// A1 range covering the whole results sheet
pub const DEFAULT_SHEET_RANGE: &str = "Clasificacion!A1:X100";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "HYBRID_LEADERBOARD_API_KEY";

/// Environment variable holding the spreadsheet id
pub const SHEET_ID_ENV: &str = "HYBRID_LEADERBOARD_SHEET_ID";

/// HTTP timeout for a sheet fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Interval between refreshes in watch mode
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Lower bound for the refresh interval
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 5;

/// Name of the configuration directory and file
pub const CONFIG_DIR_NAME: &str = "hybrid-leaderboard";
pub const CONFIG_FILE_NAME: &str = "config.toml";
