//! Per-segment statistics and category podiums

use crate::app::models::{LeaderboardDataset, Participant, Rank, Seconds};
use crate::app::services::rank_engine::{ScoreScope, rank_participants};
use crate::constants::PODIUM_SIZE;
use serde::Serialize;

/// One podium entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumEntry {
    pub participant_id: String,
    pub name: String,
    pub time: Seconds,
    pub rank: Rank,
}

/// Podium of one category in one segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPodium {
    pub category_id: String,
    pub label: String,
    pub entries: Vec<PodiumEntry>,
}

/// Statistics of one segment across the whole dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStats {
    pub index: usize,
    pub name: String,

    /// Whether the segment is a run, shown as pace instead of time
    pub is_run: bool,

    /// Participants with a recorded time
    pub scored: usize,

    pub fastest: Option<Seconds>,
    pub slowest: Option<Seconds>,

    /// One podium per category, in category order
    pub podiums: Vec<CategoryPodium>,
}

impl SegmentStats {
    /// Compute statistics for segment `index`, `None` when the index is not declared
    pub fn compute(dataset: &LeaderboardDataset, index: usize) -> Option<Self> {
        let name = dataset.segment_names.get(index)?.clone();

        let times: Vec<Seconds> = dataset
            .participants
            .iter()
            .map(|p| p.segment_time(index))
            .filter(|&time| time > 0)
            .collect();

        let podiums = dataset
            .categories
            .iter()
            .map(|category| CategoryPodium {
                category_id: category.id.clone(),
                label: category.label.clone(),
                entries: podium(&dataset.participants_in(&category.id), index),
            })
            .collect();

        Some(Self {
            index,
            is_run: name.to_lowercase().contains("run"),
            name,
            scored: times.len(),
            fastest: times.iter().copied().min(),
            slowest: times.iter().copied().max(),
            podiums,
        })
    }
}

/// First `PODIUM_SIZE` scored finishers of a pool
///
/// Entries keep their competition rank. Ties at the cut are broken by pool order.
fn podium(pool: &[&Participant], index: usize) -> Vec<PodiumEntry> {
    let ranks = rank_participants(pool, ScoreScope::Segment(index));

    let mut entries: Vec<PodiumEntry> = pool
        .iter()
        .zip(ranks)
        .filter(|&(_, rank)| rank > 0)
        .map(|(participant, rank)| PodiumEntry {
            participant_id: participant.id.clone(),
            name: participant.name.clone(),
            time: participant.segment_time(index),
            rank,
        })
        .collect();

    entries.sort_by_key(|entry| entry.rank);
    entries.truncate(PODIUM_SIZE as usize);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Category, Level, SegmentResult, Sex};

    fn participant(id: &str, category: &str, segments: &[Seconds]) -> Participant {
        Participant::new(
            id,
            id.to_uppercase(),
            category,
            segments.iter().copied().map(SegmentResult::new).collect(),
            0,
        )
    }

    fn create_test_dataset() -> LeaderboardDataset {
        LeaderboardDataset::new(
            vec![
                participant("p1", "rx", &[300, 120]),
                participant("p2", "rx", &[280, 0]),
                participant("p3", "rx", &[280, 130]),
                participant("p4", "rx", &[320, 110]),
                participant("p5", "rx", &[330, 0]),
                participant("p6", "open", &[0, 150]),
            ],
            vec![
                Category::new("rx", "RX Masculino", Sex::Male, Level::Rx),
                Category::new("open", "OPEN Masculino", Sex::Male, Level::Open),
                Category::new("scaled", "SCALED Masculino", Sex::Male, Level::Scaled),
            ],
            vec!["1.6 km Run".to_string(), "Wall Balls".to_string()],
        )
    }

    #[test]
    fn test_segment_summary() {
        let dataset = create_test_dataset();
        let stats = SegmentStats::compute(&dataset, 0).unwrap();

        assert_eq!(stats.name, "1.6 km Run");
        assert!(stats.is_run);
        assert_eq!(stats.scored, 5);
        assert_eq!(stats.fastest, Some(280));
        assert_eq!(stats.slowest, Some(330));

        let station = SegmentStats::compute(&dataset, 1).unwrap();
        assert!(!station.is_run);
        assert_eq!(station.scored, 4);
    }

    #[test]
    fn test_podium_with_tie() {
        let dataset = create_test_dataset();
        let stats = SegmentStats::compute(&dataset, 0).unwrap();

        let rx = &stats.podiums[0];
        let ranked: Vec<(&str, Rank)> = rx
            .entries
            .iter()
            .map(|e| (e.participant_id.as_str(), e.rank))
            .collect();
        assert_eq!(ranked, vec![("p2", 1), ("p3", 1), ("p1", 3)]);
    }

    #[test]
    fn test_podium_truncates_tie_at_third() {
        let dataset = LeaderboardDataset::new(
            vec![
                participant("p0", "rx", &[280]),
                participant("p1", "rx", &[290]),
                participant("p2", "rx", &[300]),
                participant("p3", "rx", &[300]),
                participant("p4", "rx", &[300]),
            ],
            vec![Category::new("rx", "RX Masculino", Sex::Male, Level::Rx)],
            vec!["1.6 km Run".to_string()],
        );
        let stats = SegmentStats::compute(&dataset, 0).unwrap();

        let ranked: Vec<(&str, Rank)> = stats.podiums[0]
            .entries
            .iter()
            .map(|e| (e.participant_id.as_str(), e.rank))
            .collect();
        assert_eq!(ranked, vec![("p0", 1), ("p1", 2), ("p2", 3)]);
    }

    #[test]
    fn test_podium_tie_at_first_keeps_ranks() {
        let dataset = LeaderboardDataset::new(
            vec![
                participant("p0", "rx", &[300]),
                participant("p1", "rx", &[280]),
                participant("p2", "rx", &[280]),
                participant("p3", "rx", &[280]),
                participant("p4", "rx", &[280]),
            ],
            vec![Category::new("rx", "RX Masculino", Sex::Male, Level::Rx)],
            vec!["Row".to_string()],
        );
        let stats = SegmentStats::compute(&dataset, 0).unwrap();

        let ranked: Vec<(&str, Rank)> = stats.podiums[0]
            .entries
            .iter()
            .map(|e| (e.participant_id.as_str(), e.rank))
            .collect();
        assert_eq!(ranked, vec![("p1", 1), ("p2", 1), ("p3", 1)]);
    }

    #[test]
    fn test_podium_skips_unscored_and_empty_categories() {
        let dataset = create_test_dataset();
        let stats = SegmentStats::compute(&dataset, 0).unwrap();

        assert_eq!(stats.podiums.len(), 3);
        assert!(stats.podiums[1].entries.is_empty());
        assert!(stats.podiums[2].entries.is_empty());

        let station = SegmentStats::compute(&dataset, 1).unwrap();
        assert_eq!(station.podiums[1].entries.len(), 1);
        assert_eq!(station.podiums[1].entries[0].time, 150);
    }

    #[test]
    fn test_unknown_segment_is_none() {
        let dataset = create_test_dataset();
        assert!(SegmentStats::compute(&dataset, 2).is_none());
    }

    #[test]
    fn test_segment_without_results() {
        let dataset = LeaderboardDataset::new(
            vec![participant("p1", "rx", &[0])],
            vec![Category::new("rx", "RX Masculino", Sex::Male, Level::Rx)],
            vec!["Row".to_string()],
        );
        let stats = SegmentStats::compute(&dataset, 0).unwrap();
        assert_eq!(stats.scored, 0);
        assert_eq!(stats.fastest, None);
        assert!(stats.podiums[0].entries.is_empty());
    }
}
