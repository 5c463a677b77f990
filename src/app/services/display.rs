//! Display helpers for ranks and run paces

use crate::app::models::{Rank, Seconds};
use crate::constants::{RANK_PLACEHOLDER, RUN_SEGMENT_KM, SEGMENT_TIME_PLACEHOLDER};

/// Render a rank with its English ordinal suffix, `0` as the placeholder
pub fn format_rank(rank: Rank) -> String {
    if rank == 0 {
        return RANK_PLACEHOLDER.to_string();
    }

    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", rank, suffix)
}

/// Per-kilometre pace of a run segment, rendered "M:SS min/km"
///
/// Partial seconds are truncated. A time of `0` renders as the placeholder.
pub fn format_pace(seconds: Seconds) -> String {
    if seconds == 0 {
        return SEGMENT_TIME_PLACEHOLDER.to_string();
    }

    let pace = (f64::from(seconds) / RUN_SEGMENT_KM).floor() as u64;
    format!("{}:{:02} min/km", pace / 60, pace % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank_suffixes() {
        assert_eq!(format_rank(1), "1st");
        assert_eq!(format_rank(2), "2nd");
        assert_eq!(format_rank(3), "3rd");
        assert_eq!(format_rank(4), "4th");
        assert_eq!(format_rank(11), "11th");
        assert_eq!(format_rank(12), "12th");
        assert_eq!(format_rank(13), "13th");
        assert_eq!(format_rank(21), "21st");
        assert_eq!(format_rank(22), "22nd");
        assert_eq!(format_rank(111), "111th");
        assert_eq!(format_rank(101), "101st");
    }

    #[test]
    fn test_format_rank_unranked() {
        assert_eq!(format_rank(0), "-");
    }

    #[test]
    fn test_format_pace() {
        // 480 s over 1.6 km = 300 s/km
        assert_eq!(format_pace(480), "5:00 min/km");
        // 500 / 1.6 = 312.5
        assert_eq!(format_pace(500), "5:12 min/km");
        assert_eq!(format_pace(0), "--:--");
    }
}
