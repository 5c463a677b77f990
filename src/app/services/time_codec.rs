//! Time string codec for segment ("MM:SS") and total ("HH:MM:SS") times
//!
//! Parsing is total: any input that is not the expected shape degrades to the
//! `0` "no result" sentinel instead of failing, and a non-numeric component
//! counts as `0`. Formatting renders `0` back to the placeholder strings.

use crate::app::models::Seconds;
use crate::constants::{SEGMENT_TIME_PLACEHOLDER, TOTAL_TIME_PLACEHOLDER};
use tracing::debug;

/// Parse a segment time "MM:SS" into seconds
pub fn parse_segment_time(text: &str) -> Seconds {
    let text = text.trim();
    if text.is_empty() || text == SEGMENT_TIME_PLACEHOLDER {
        return 0;
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 {
        debug!(
            "Segment time '{}' is not MM:SS, treating as no result",
            text
        );
        return 0;
    }

    let minutes = parse_component(parts[0]);
    let seconds = parse_component(parts[1]);

    minutes.saturating_mul(60).saturating_add(seconds)
}

/// Parse a total time "HH:MM:SS" into seconds
pub fn parse_total_time(text: &str) -> Seconds {
    let text = text.trim();
    if text.is_empty() || text == TOTAL_TIME_PLACEHOLDER {
        return 0;
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        debug!(
            "Total time '{}' is not HH:MM:SS, treating as no result",
            text
        );
        return 0;
    }

    let hours = parse_component(parts[0]);
    let minutes = parse_component(parts[1]);
    let seconds = parse_component(parts[2]);

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Format seconds as "MM:SS", `0` as the placeholder
pub fn format_segment_time(seconds: Seconds) -> String {
    if seconds == 0 {
        return SEGMENT_TIME_PLACEHOLDER.to_string();
    }

    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format seconds as "HH:MM:SS", `0` as the placeholder
pub fn format_total_time(seconds: Seconds) -> String {
    if seconds == 0 {
        return TOTAL_TIME_PLACEHOLDER.to_string();
    }

    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Whether a segment cell is empty, the placeholder, or a strict "MM:SS"
///
/// Cells failing this check still parse (leniently); the check only decides
/// whether the leniency should be reported.
pub fn is_clean_segment_time(text: &str) -> bool {
    is_clean(text, SEGMENT_TIME_PLACEHOLDER, 2)
}

/// Whether a total cell is empty, the placeholder, or a strict "HH:MM:SS"
pub fn is_clean_total_time(text: &str) -> bool {
    is_clean(text, TOTAL_TIME_PLACEHOLDER, 3)
}

fn is_clean(text: &str, placeholder: &str, components: usize) -> bool {
    let text = text.trim();
    if text.is_empty() || text == placeholder {
        return true;
    }

    let parts: Vec<&str> = text.split(':').collect();
    parts.len() == components && parts.iter().all(|p| p.trim().parse::<Seconds>().is_ok())
}

/// Lenient non-negative integer component; anything else is `0`
fn parse_component(component: &str) -> Seconds {
    component.trim().parse::<Seconds>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_time() {
        assert_eq!(parse_segment_time("12:30"), 750);
        assert_eq!(parse_segment_time("05:10"), 310);
        assert_eq!(parse_segment_time("00:01"), 1);
        assert_eq!(parse_segment_time(" 03:07 "), 187);
    }

    #[test]
    fn test_parse_segment_time_degrades_to_sentinel() {
        assert_eq!(parse_segment_time(""), 0);
        assert_eq!(parse_segment_time("--:--"), 0);
        assert_eq!(parse_segment_time("1:02:03"), 0);
        assert_eq!(parse_segment_time("90"), 0);
        assert_eq!(parse_segment_time("DNF"), 0);
    }

    #[test]
    fn test_parse_segment_time_non_numeric_component() {
        assert_eq!(parse_segment_time("xx:30"), 30);
        assert_eq!(parse_segment_time("02:yy"), 120);
        assert_eq!(parse_segment_time("-1:30"), 30);
    }

    #[test]
    fn test_parse_total_time() {
        assert_eq!(parse_total_time("01:30:45"), 5445);
        assert_eq!(parse_total_time("00:00:59"), 59);
        assert_eq!(parse_total_time("10:00:00"), 36000);
    }

    #[test]
    fn test_parse_total_time_degrades_to_sentinel() {
        assert_eq!(parse_total_time("--:--:--"), 0);
        assert_eq!(parse_total_time(""), 0);
        assert_eq!(parse_total_time("30:45"), 0);
        assert_eq!(parse_total_time("1:2:3:4"), 0);
        assert_eq!(parse_total_time("aa:01:00"), 60);
    }

    #[test]
    fn test_clean_checks() {
        assert!(is_clean_segment_time("12:30"));
        assert!(is_clean_segment_time("--:--"));
        assert!(is_clean_segment_time(""));
        assert!(!is_clean_segment_time("12:3x"));
        assert!(!is_clean_segment_time("01:12:30"));
        assert!(is_clean_total_time("01:30:45"));
        assert!(is_clean_total_time("--:--:--"));
        assert!(!is_clean_total_time("30:45"));
        assert!(!is_clean_total_time("DNF"));
    }

    #[test]
    fn test_format_times() {
        assert_eq!(format_segment_time(750), "12:30");
        assert_eq!(format_segment_time(5), "00:05");
        assert_eq!(format_segment_time(0), "--:--");
        assert_eq!(format_total_time(5445), "01:30:45");
        assert_eq!(format_total_time(0), "--:--:--");
    }

    #[test]
    fn test_segment_round_trip() {
        for seconds in (1..100 * 60).step_by(7) {
            assert_eq!(parse_segment_time(&format_segment_time(seconds)), seconds);
        }
        assert_eq!(parse_segment_time(&format_segment_time(0)), 0);
    }

    #[test]
    fn test_total_round_trip() {
        for seconds in (1..100 * 3600).step_by(997) {
            assert_eq!(parse_total_time(&format_total_time(seconds)), seconds);
        }
        assert_eq!(parse_total_time(&format_total_time(0)), 0);
    }

    #[test]
    fn test_well_formed_inputs_reproduce_exactly() {
        for text in ["00:01", "12:30", "59:59", "07:00"] {
            assert_eq!(format_segment_time(parse_segment_time(text)), text);
        }
        for text in ["00:00:01", "01:30:45", "23:59:59"] {
            assert_eq!(format_total_time(parse_total_time(text)), text);
        }
    }
}
