//! Deduplication of candidates against the publish history

use crate::types::{Candidate, History};

/// Return the candidates whose ids have never been published, preserving
/// the source order of the survivors.
///
/// Pure: same history and candidates always produce the same result, and
/// applying it twice is the same as applying it once.
pub fn unused(history: &History, candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|candidate| !history.contains(candidate.id()))
        .collect()
}
