//! Poster run orchestrator with dependency injection
//!
//! Owns the single read-modify-publish-write cycle. The ordering contract:
//! the history is mutated and persisted only after the publish call has
//! succeeded, so an entry can never be marked used without a publish
//! attempt. The opposite window (published but not recorded, if the
//! history write then fails) is accepted and surfaced as the run's error.

use chrono::Utc;
use rand::rngs::StdRng;
use tracing::{error, info, warn};

use crate::cancel::CancelToken;
use crate::core::{filter, selector};
use crate::error::{PosterError, PosterResult};
use crate::traits::{CandidateSource, HistoryStore, Publisher, Renderer};
use crate::types::RunReport;

/// Poster with dependency injection
pub struct Poster<S, C, R, P>
where
    S: HistoryStore,
    C: CandidateSource,
    R: Renderer,
    P: Publisher,
{
    store: S,
    source: C,
    renderer: R,
    publisher: P,
    history_key: String,
    rng: StdRng,
}

impl<S, C, R, P> Poster<S, C, R, P>
where
    S: HistoryStore,
    C: CandidateSource,
    R: Renderer,
    P: Publisher,
{
    pub fn new(
        store: S,
        source: C,
        renderer: R,
        publisher: P,
        history_key: impl Into<String>,
        rng: StdRng,
    ) -> Self {
        Self {
            store,
            source,
            renderer,
            publisher,
            history_key: history_key.into(),
            rng,
        }
    }

    /// Execute one complete run: load history, load candidates, filter,
    /// select, render, publish, persist.
    ///
    /// Cancellation is honored while loading and at the checkpoint just
    /// before publish. From publish success through history persistence the
    /// token is ignored.
    pub async fn run(&mut self, cancel: &CancelToken) -> PosterResult<RunReport> {
        let mut history = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(PosterError::Cancelled { reason: "while loading history".to_string() })
            }
            loaded = self.store.get(&self.history_key) => loaded?.unwrap_or_default(),
        };
        info!("found {} previously published entries", history.len());

        let candidates = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(PosterError::Cancelled { reason: "while loading candidates".to_string() })
            }
            loaded = self.source.load() => loaded?,
        };
        let total = candidates.len();

        let remaining = filter::unused(&history, candidates);
        info!("found {} candidates, {} unused", total, remaining.len());

        if remaining.is_empty() {
            return Err(PosterError::NoCandidatesRemaining { total });
        }

        let chosen = selector::pick(&remaining, &mut self.rng);
        let chosen_id = chosen.id().to_string();
        info!("chose {:?}", chosen_id);

        let text = self.renderer.render(chosen)?;

        if cancel.is_cancelled() {
            return Err(PosterError::Cancelled { reason: "before publish".to_string() });
        }

        // Past this point the run must complete the history write; honoring
        // cancellation now would leave a successful publish unrecorded.
        self.publisher.publish(&text).await?;

        history.record(chosen_id.clone(), Utc::now());
        if let Err(err) = self.store.set(&self.history_key, &history).await {
            // The publish already happened; this id is now unrecorded and a
            // future run may select it again.
            error!("history write failed after a successful publish: {err}");
            return Err(err);
        }

        Ok(RunReport {
            chosen_id,
            text,
            total_candidates: total,
            unused_candidates: remaining.len(),
        })
    }
}

/// Log a finished run at an appropriate level.
pub fn log_outcome(result: &PosterResult<RunReport>) {
    match result {
        Ok(report) => info!(
            "published {:?} ({} of {} candidates were still unused)",
            report.chosen_id, report.unused_candidates, report.total_candidates
        ),
        Err(PosterError::NoCandidatesRemaining { total }) => {
            warn!("nothing to do: all {total} candidates already published")
        }
        Err(err) => error!("run aborted: {err}"),
    }
}
