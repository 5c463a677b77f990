//! Derived ranked views for participant detail surfaces
//!
//! A ranked view answers, for one participant: overall rank, category rank, and for
//! every segment the global and category rank with the size of the category pool.
//! Every scope is computed from scratch with the rank engine on each call.

use crate::app::models::{LeaderboardDataset, Participant, Rank, RankedView, SegmentRank};
use crate::app::services::rank_engine::{ScoreScope, rank_participants};
use tracing::{debug, warn};

/// Build the ranked view of one participant
///
/// Returns `None` when the id is not in the dataset, which is distinct from a
/// participant that is present but unranked (rank `0` in some scopes).
pub fn build_ranked_view(dataset: &LeaderboardDataset, participant_id: &str) -> Option<RankedView> {
    let Some(index) = dataset
        .participants
        .iter()
        .position(|p| p.id == participant_id)
    else {
        debug!("Participant {} not found in dataset", participant_id);
        return None;
    };
    let participant = &dataset.participants[index];

    if dataset.category(&participant.category_id).is_none() {
        warn!(
            "Participant {} references unknown category {}",
            participant.id, participant.category_id
        );
    }

    let pool = dataset.participants_in(&participant.category_id);
    let pool_index = pool.iter().position(|p| p.id == participant.id)?;

    let rank_in = |pool: &[&Participant], at: usize, scope: ScoreScope| -> Rank {
        rank_participants(pool, scope)[at]
    };
    let everyone: Vec<&Participant> = dataset.participants.iter().collect();

    let per_segment = (0..dataset.segment_count())
        .map(|k| {
            let scope = ScoreScope::Segment(k);
            SegmentRank {
                time: participant.segment_time(k),
                global_rank: rank_in(&everyone, index, scope),
                category_rank: rank_in(&pool, pool_index, scope),
                category_pool_size: pool.len(),
            }
        })
        .collect();

    Some(RankedView {
        participant_id: participant.id.clone(),
        category_id: participant.category_id.clone(),
        overall_rank: rank_in(&everyone, index, ScoreScope::Total),
        overall_pool_size: dataset.participants.len(),
        category_rank: rank_in(&pool, pool_index, ScoreScope::Total),
        category_pool_size: pool.len(),
        per_segment,
    })
}

/// Build ranked views for every participant, in dataset order
///
/// Produces the same views as calling [`build_ranked_view`] per participant, but
/// ranks each scope once for the whole dataset.
pub fn build_ranked_views(dataset: &LeaderboardDataset) -> Vec<RankedView> {
    let segment_count = dataset.segment_count();
    let everyone: Vec<&Participant> = dataset.participants.iter().collect();

    let overall = rank_participants(&everyone, ScoreScope::Total);
    let global_segments: Vec<Vec<Rank>> = (0..segment_count)
        .map(|k| rank_participants(&everyone, ScoreScope::Segment(k)))
        .collect();

    // Category scopes, keyed by participant position in the dataset
    let mut category_total = vec![0; everyone.len()];
    let mut category_segments = vec![vec![0; segment_count]; everyone.len()];
    let mut category_pool = vec![0; everyone.len()];

    let mut seen: Vec<&str> = Vec::new();
    for participant in &everyone {
        let category_id = participant.category_id.as_str();
        if seen.contains(&category_id) {
            continue;
        }
        seen.push(category_id);

        let members: Vec<usize> = everyone
            .iter()
            .enumerate()
            .filter(|(_, p)| p.in_category(category_id))
            .map(|(i, _)| i)
            .collect();
        let pool: Vec<&Participant> = members.iter().map(|&i| everyone[i]).collect();

        let totals = rank_participants(&pool, ScoreScope::Total);
        let segments: Vec<Vec<Rank>> = (0..segment_count)
            .map(|k| rank_participants(&pool, ScoreScope::Segment(k)))
            .collect();

        for (slot, &i) in members.iter().enumerate() {
            category_total[i] = totals[slot];
            category_pool[i] = pool.len();
            for k in 0..segment_count {
                category_segments[i][k] = segments[k][slot];
            }
        }
    }

    everyone
        .iter()
        .enumerate()
        .map(|(i, participant)| RankedView {
            participant_id: participant.id.clone(),
            category_id: participant.category_id.clone(),
            overall_rank: overall[i],
            overall_pool_size: everyone.len(),
            category_rank: category_total[i],
            category_pool_size: category_pool[i],
            per_segment: (0..segment_count)
                .map(|k| SegmentRank {
                    time: participant.segment_time(k),
                    global_rank: global_segments[k][i],
                    category_rank: category_segments[i][k],
                    category_pool_size: category_pool[i],
                })
                .collect(),
        })
        .collect()
}
