//! Autoposter library
//!
//! Selects one previously-unused entry from a candidate list, renders it
//! through a template, publishes it, and durably records the entry's id so
//! it is never selected again. The publish call strictly precedes history
//! persistence, so nothing is ever marked used without a publish attempt.

pub mod cancel;
pub mod core;
pub mod error;
pub mod logging;
pub mod poster_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{PosterError, PosterResult};
pub use poster_impl::Poster;
pub use traits::*;
pub use types::{Candidate, History, RunReport};
