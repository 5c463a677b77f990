//! Data models for the hybrid leaderboard
//!
//! This module contains the core data structures: participant records built from
//! sheet rows, the fixed category descriptors, the dataset handed to display
//! surfaces and the derived per-participant ranked view.
//!
//! Times are whole seconds. A time of `0` is the "no result" sentinel, never a
//! literal zero duration; the same holds for rank `0` meaning "unranked".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole seconds; `0` means no result
pub type Seconds = u32;

/// Competition rank; `0` means unranked
pub type Rank = u32;

/// Raw sheet as delivered by a data source: rows of string cells
pub type RawTable = Vec<Vec<String>>;

// =============================================================================
// Participant Records
// =============================================================================

/// Result of one participant in one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Segment time in seconds (`0` = not recorded)
    pub time: Seconds,
}

impl SegmentResult {
    pub fn new(time: Seconds) -> Self {
        Self { time }
    }

    /// Whether a time was recorded for this segment
    pub fn is_recorded(&self) -> bool {
        self.time > 0
    }
}

/// One competitor or team, built from a single sheet row
///
/// Constructed once per ingestion pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Stable identifier derived from the absolute sheet row
    pub id: String,

    /// Display name
    pub name: String,

    /// Identifier of the category in the registry
    pub category_id: String,

    /// One result per declared segment, in header order
    pub segments: Vec<SegmentResult>,

    /// Aggregate time in seconds (`0` = no aggregate result)
    pub total_time: Seconds,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        segments: Vec<SegmentResult>,
        total_time: Seconds,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            segments,
            total_time,
        }
    }

    /// Time for segment `index`, `0` when missing or out of range
    pub fn segment_time(&self, index: usize) -> Seconds {
        self.segments.get(index).map_or(0, |segment| segment.time)
    }

    /// Category membership by id equality
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category_id == category_id
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Sex of a competitive division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Competitive level of a division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Scaled,
    Open,
    Rx,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Scaled => write!(f, "SCALED"),
            Level::Open => write!(f, "OPEN"),
            Level::Rx => write!(f, "RX"),
        }
    }
}

/// A competitive division (sex x level) with its own ranking scope
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub sex: Sex,
    pub level: Level,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>, sex: Sex, level: Level) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sex,
            level,
        }
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// Everything display surfaces need, rebuilt wholesale on every refresh
///
/// Every participant carries exactly `segment_names.len()` segment results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardDataset {
    /// Participants in display order (binding order, then sheet row order)
    pub participants: Vec<Participant>,

    /// Categories of the competition
    pub categories: Vec<Category>,

    /// Segment names from the header row
    pub segment_names: Vec<String>,
}

impl LeaderboardDataset {
    pub fn new(
        participants: Vec<Participant>,
        categories: Vec<Category>,
        segment_names: Vec<String>,
    ) -> Self {
        Self {
            participants,
            categories,
            segment_names,
        }
    }

    /// Number of declared segments
    pub fn segment_count(&self) -> usize {
        self.segment_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Look up a participant by id
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Participants of one category, in display order
    pub fn participants_in(&self, category_id: &str) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.in_category(category_id))
            .collect()
    }

    /// Participants whose segment count disagrees with the header
    pub fn segment_count_violations(&self) -> Vec<&Participant> {
        let expected = self.segment_count();
        self.participants
            .iter()
            .filter(|p| p.segments.len() != expected)
            .collect()
    }
}

// =============================================================================
// Ranked View
// =============================================================================

/// Ranks of one participant in one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRank {
    /// The participant's time in this segment
    pub time: Seconds,
    pub global_rank: Rank,
    pub category_rank: Rank,
    pub category_pool_size: usize,
}

/// Derived ranks of one participant across all scopes; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedView {
    pub participant_id: String,
    pub category_id: String,
    pub overall_rank: Rank,
    pub overall_pool_size: usize,
    pub category_rank: Rank,
    pub category_pool_size: usize,
    pub per_segment: Vec<SegmentRank>,
}

impl RankedView {
    /// Whether the participant has an overall rank
    pub fn is_ranked(&self) -> bool {
        self.overall_rank > 0
    }
}
