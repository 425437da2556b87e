//! Collaborator trait definitions with mockall annotations for testing
//!
//! The poster talks to four external collaborators: the history store, the
//! candidate source, the template renderer, and the publishing service.
//! Each is a trait so the orchestrator can be exercised end to end against
//! generated mocks.

use async_trait::async_trait;

use crate::error::PosterResult;
use crate::types::{Candidate, History};

/// Key-value store holding the publish history.
///
/// "Not found" is a normal signal (`Ok(None)`), distinct from store failures.
#[mockall::automock]
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Fetch the history stored under `key`, or `None` if the key has never
    /// been written.
    async fn get(&self, key: &str) -> PosterResult<Option<History>>;

    /// Persist `history` under `key`, replacing any previous value.
    async fn set(&self, key: &str, history: &History) -> PosterResult<()>;
}

/// Source of the ordered candidate list.
#[mockall::automock]
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Load and validate all candidates. A syntactically valid but empty
    /// source yields an empty list, not an error.
    async fn load(&self) -> PosterResult<Vec<Candidate>>;
}

/// Renders a candidate's fields into the text to publish.
#[mockall::automock]
pub trait Renderer: Send + Sync {
    fn render(&self, candidate: &Candidate) -> PosterResult<String>;
}

/// Sends rendered text to the publishing service.
///
/// Exactly one call per run, no internal retry.
#[mockall::automock]
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, text: &str) -> PosterResult<()>;
}
