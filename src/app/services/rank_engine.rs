//! Standard competition ranking with a sentinel for unscored entries
//!
//! Lower scores are better. Equal scores share a rank and the next distinct score
//! is ranked by the number of entries strictly ahead of it, so `[10, 10, 12]`
//! ranks as `[1, 1, 3]`. A score of `0` means "no result" and always ranks `0`.
//!
//! The engine keeps no state: callers re-run it whenever the dataset changes.

use crate::app::models::{Participant, Rank, Seconds};
use std::borrow::Borrow;

/// Compute ranks parallel to `items`
///
/// `ranks[i] == 0` exactly when `score_of(&items[i]) == 0`. Exact ties keep input
/// order during sorting but always receive the same rank, so the result per item
/// does not depend on input order.
pub fn compute_ranks<T, F>(items: &[T], score_of: F) -> Vec<Rank>
where
    F: Fn(&T) -> Seconds,
{
    let mut scored: Vec<(usize, Seconds)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (index, score_of(item)))
        .filter(|&(_, score)| score > 0)
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|&(_, score)| score);

    let mut ranks = vec![0; items.len()];
    let mut current_rank: Rank = 1;
    let mut current_score = scored.first().map_or(0, |&(_, score)| score);

    for (position, &(index, score)) in scored.iter().enumerate() {
        if score > current_score {
            current_rank = position as Rank + 1;
            current_score = score;
        }
        ranks[index] = current_rank;
    }

    ranks
}

/// Which time a ranking is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreScope {
    /// Aggregate time
    Total,
    /// Time of one segment, by index
    Segment(usize),
}

impl ScoreScope {
    /// Score of a participant in this scope
    pub fn score(&self, participant: &Participant) -> Seconds {
        match *self {
            ScoreScope::Total => participant.total_time,
            ScoreScope::Segment(index) => participant.segment_time(index),
        }
    }
}

/// Rank a pool of participants in one scope
pub fn rank_participants<P>(pool: &[P], scope: ScoreScope) -> Vec<Rank>
where
    P: Borrow<Participant>,
{
    compute_ranks(pool, |p| scope.score(p.borrow()))
}
