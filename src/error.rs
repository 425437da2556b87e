//! Error types for the poster run

use thiserror::Error;

/// Result type for poster operations
pub type PosterResult<T> = Result<T, PosterError>;

/// Poster error types
///
/// Every variant is terminal for the run; retry policy belongs to whatever
/// scheduler invokes the process.
#[derive(Error, Debug)]
pub enum PosterError {
    #[error("history store error: {message}")]
    StoreError { message: String },

    #[error("failed to load candidate source: {message}")]
    SourceLoadError { message: String },

    #[error("malformed candidate at index {index}: {message}")]
    MalformedCandidate { index: usize, message: String },

    #[error("no unused candidates remaining ({total} total, all previously published)")]
    NoCandidatesRemaining { total: usize },

    #[error("template execution failed: {message}")]
    TemplateError { message: String },

    #[error("publish failed: {message}")]
    PublishError { status: Option<u16>, message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("run cancelled {reason}")]
    Cancelled { reason: String },
}
