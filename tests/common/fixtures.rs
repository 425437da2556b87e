//! Builders shared by the integration tests

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use autoposter::cancel::{self, CancelToken};
use autoposter::{Candidate, History};

pub fn candidates(ids: &[&str]) -> Vec<Candidate> {
    ids.iter().copied().map(Candidate::with_id).collect()
}

pub fn history_with(ids: &[&str]) -> History {
    let mut history = History::new();
    for id in ids {
        history.record(*id, Utc::now());
    }
    history
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A token whose handle is already gone: never cancels.
pub fn idle_cancel() -> CancelToken {
    cancel::channel().1
}
