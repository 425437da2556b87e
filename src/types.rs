//! Data types shared across the poster

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PosterError, PosterResult};

/// One selectable content entry from the candidate source.
///
/// The `id` is the only field with a schema; everything else the source
/// provides is carried verbatim in `fields` (including `id` itself) so the
/// renderer can reference any of it by name. Validation happens once here,
/// at load time, never downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    id: String,
    fields: Map<String, Value>,
}

impl Candidate {
    /// Validate a raw field mapping into a candidate.
    ///
    /// `index` is the entry's position in the source list, used only for
    /// error reporting.
    pub fn from_fields(index: usize, fields: Map<String, Value>) -> PosterResult<Self> {
        let id = match fields.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => {
                return Err(PosterError::MalformedCandidate {
                    index,
                    message: format!("\"id\" must be a string, got {other}"),
                })
            }
            None => {
                return Err(PosterError::MalformedCandidate {
                    index,
                    message: "missing required \"id\" field".to_string(),
                })
            }
        };
        Ok(Self { id, fields })
    }

    /// Build a candidate with only an `id` field.
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.clone()));
        Self { id, fields }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full field mapping, passed through to the renderer.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Persisted record of previously published candidate ids and when each
/// was published.
///
/// Ids are never removed and an existing timestamp is never overwritten.
/// Serializes as a plain JSON object so the stored form stays readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: BTreeMap<String, DateTime<Utc>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Record a publish. A no-op if the id is already present, so an
    /// earlier timestamp can never regress.
    pub fn record(&mut self, id: impl Into<String>, published_at: DateTime<Utc>) {
        self.entries.entry(id.into()).or_insert(published_at);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn published_at(&self, id: &str) -> Option<DateTime<Utc>> {
        self.entries.get(id).copied()
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub chosen_id: String,
    pub text: String,
    pub total_candidates: usize,
    pub unused_candidates: usize,
}
