//! Candidate deduplication.
//!
//! Strategies deliberately emit overlapping hypotheses (every dispersal
//! split of one block, the same value seen by two sub-patterns). Two passes
//! collapse them: first by value, then by position. The survivors are still
//! unsorted; ranking happens later.

use super::Candidate;

pub(crate) fn dedup_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    // Pass 1: one entry per distinct value, keeping the highest confidence.
    let mut by_value: Vec<Candidate> = Vec::new();
    for cand in candidates {
        match by_value.iter_mut().find(|c| c.value == cand.value) {
            Some(existing) => {
                if cand.confidence > existing.confidence {
                    *existing = cand;
                }
            }
            None => by_value.push(cand),
        }
    }

    // Pass 2: one entry per position. Competing interpretations of the same
    // match share an offset; the stronger one wins, and on equal scores the
    // later split (the longer dispersal) replaces the earlier.
    let mut by_position: Vec<Candidate> = Vec::new();
    for cand in by_value {
        match by_position.iter_mut().find(|c| c.position == cand.position) {
            Some(existing) => {
                if cand.confidence >= existing.confidence {
                    *existing = cand;
                }
            }
            None => by_position.push(cand),
        }
    }

    by_position
}
