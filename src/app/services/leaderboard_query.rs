//! Filtering and sorting of the leaderboard table
//!
//! Queries only select and reorder rows. Ranks attached to each row are always
//! computed over the whole dataset, so a filter never changes a participant's rank.

use crate::app::models::{LeaderboardDataset, Participant, Rank, Seconds};
use crate::app::services::ranked_view::build_ranked_views;
use crate::{Error, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Ingestion order (binding order, then sheet row order)
    #[default]
    Position,
    Name,
    TotalTime,
    /// Time of one segment, by index
    Segment(usize),
}

impl FromStr for SortField {
    type Err = Error;

    /// Accepts `position`, `name`, `total` or `segment:<index>`
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "position" | "pos" => Ok(SortField::Position),
            "name" => Ok(SortField::Name),
            "total" | "total-time" => Ok(SortField::TotalTime),
            other => other
                .strip_prefix("segment:")
                .and_then(|index| index.parse().ok())
                .map(SortField::Segment)
                .ok_or_else(|| {
                    Error::configuration(format!(
                        "Unknown sort field '{}' (use position, name, total or segment:N)",
                        s
                    ))
                }),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Position => write!(f, "position"),
            SortField::Name => write!(f, "name"),
            SortField::TotalTime => write!(f, "total"),
            SortField::Segment(index) => write!(f, "segment:{}", index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Filter and sort settings for the leaderboard table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeaderboardQuery {
    /// Only participants of this category id
    pub category: Option<String>,

    /// Case-insensitive substring of the participant name
    pub search: Option<String>,

    pub sort: SortField,
    pub direction: SortDirection,
}

/// One row of the leaderboard table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow<'a> {
    pub participant: &'a Participant,
    pub overall_rank: Rank,
    pub category_rank: Rank,
}

impl LeaderboardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    /// Restrict to names containing `text`
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Sort by a field in a direction
    pub fn sorted_by(mut self, sort: SortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    /// Whether a participant passes the filters
    pub fn matches(&self, participant: &Participant) -> bool {
        let in_category = self
            .category
            .as_deref()
            .is_none_or(|id| participant.in_category(id));

        let found = self.search.as_deref().is_none_or(|text| {
            participant
                .name
                .to_lowercase()
                .contains(&text.trim().to_lowercase())
        });

        in_category && found
    }

    /// Run the query against a dataset
    pub fn run<'a>(&self, dataset: &'a LeaderboardDataset) -> Vec<LeaderboardRow<'a>> {
        let views = build_ranked_views(dataset);

        let mut rows: Vec<(usize, LeaderboardRow<'a>)> = dataset
            .participants
            .iter()
            .zip(views)
            .enumerate()
            .filter(|(_, (participant, _))| self.matches(participant))
            .map(|(position, (participant, view))| {
                (
                    position,
                    LeaderboardRow {
                        participant,
                        overall_rank: view.overall_rank,
                        category_rank: view.category_rank,
                    },
                )
            })
            .collect();

        // sort_by is stable, equal keys keep ingestion order in both directions
        rows.sort_by(|(pa, a), (pb, b)| {
            let ordering = self.compare(*pa, a.participant, *pb, b.participant);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        rows.into_iter().map(|(_, row)| row).collect()
    }

    fn compare(&self, pa: usize, a: &Participant, pb: usize, b: &Participant) -> Ordering {
        match self.sort {
            SortField::Position => pa.cmp(&pb),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::TotalTime => time_key(a.total_time).cmp(&time_key(b.total_time)),
            SortField::Segment(index) => {
                time_key(a.segment_time(index)).cmp(&time_key(b.segment_time(index)))
            }
        }
    }
}

/// Missing times sort after every recorded time
fn time_key(time: Seconds) -> Seconds {
    if time == 0 {
        Seconds::MAX
    } else {
        time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Category, Level, SegmentResult, Sex};

    fn participant(
        id: &str,
        name: &str,
        category: &str,
        total: Seconds,
        seg: Seconds,
    ) -> Participant {
        Participant::new(id, name, category, vec![SegmentResult::new(seg)], total)
    }

    fn create_test_dataset() -> LeaderboardDataset {
        LeaderboardDataset::new(
            vec![
                participant("p3", "Ana Ruiz", "rx", 3100, 300),
                participant("p4", "Bruno Gil", "rx", 0, 280),
                participant("p5", "carla diaz", "rx", 2900, 0),
                participant("p7", "Diego Ana", "open", 3000, 310),
            ],
            vec![
                Category::new("rx", "RX Masculino", Sex::Male, Level::Rx),
                Category::new("open", "OPEN Masculino", Sex::Male, Level::Open),
            ],
            vec!["Run".to_string()],
        )
    }

    fn ids(rows: &[LeaderboardRow<'_>]) -> Vec<String> {
        rows.iter().map(|row| row.participant.id.clone()).collect()
    }

    #[test]
    fn test_default_query_keeps_position_order() {
        let dataset = create_test_dataset();
        let rows = LeaderboardQuery::new().run(&dataset);
        assert_eq!(ids(&rows), vec!["p3", "p4", "p5", "p7"]);
    }

    #[test]
    fn test_category_filter_keeps_global_ranks() {
        let dataset = create_test_dataset();
        let rows = LeaderboardQuery::new().with_category("open").run(&dataset);

        assert_eq!(ids(&rows), vec!["p7"]);
        assert_eq!(rows[0].overall_rank, 2);
        assert_eq!(rows[0].category_rank, 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dataset = create_test_dataset();
        let rows = LeaderboardQuery::new().with_search("ANA").run(&dataset);
        assert_eq!(ids(&rows), vec!["p3", "p7"]);

        let rows = LeaderboardQuery::new().with_search("Carla").run(&dataset);
        assert_eq!(ids(&rows), vec!["p5"]);
    }

    #[test]
    fn test_time_sort_puts_missing_last_ascending() {
        let dataset = create_test_dataset();
        let rows = LeaderboardQuery::new()
            .sorted_by(SortField::TotalTime, SortDirection::Ascending)
            .run(&dataset);
        assert_eq!(ids(&rows), vec!["p5", "p7", "p3", "p4"]);
    }

    #[test]
    fn test_time_sort_puts_missing_first_descending() {
        let dataset = create_test_dataset();
        let rows = LeaderboardQuery::new()
            .sorted_by(SortField::TotalTime, SortDirection::Descending)
            .run(&dataset);
        assert_eq!(ids(&rows), vec!["p4", "p3", "p7", "p5"]);
    }

    #[test]
    fn test_segment_and_name_sort() {
        let dataset = create_test_dataset();
        let rows = LeaderboardQuery::new()
            .sorted_by(SortField::Segment(0), SortDirection::Ascending)
            .run(&dataset);
        assert_eq!(ids(&rows), vec!["p4", "p3", "p7", "p5"]);

        let rows = LeaderboardQuery::new()
            .sorted_by(SortField::Name, SortDirection::Ascending)
            .run(&dataset);
        assert_eq!(ids(&rows), vec!["p3", "p4", "p5", "p7"]);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!(
            "position".parse::<SortField>().unwrap(),
            SortField::Position
        );
        assert_eq!("Name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("total".parse::<SortField>().unwrap(), SortField::TotalTime);
        assert_eq!(
            "segment:3".parse::<SortField>().unwrap(),
            SortField::Segment(3)
        );
        assert!("segment:x".parse::<SortField>().is_err());
        assert!("rank".parse::<SortField>().is_err());
    }
}
