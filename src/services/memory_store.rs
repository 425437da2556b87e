//! In-memory history store for mock mode and tests
//!
//! Cloning shares the underlying map, so a test can hold a handle and
//! observe what a run persisted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::PosterResult;
use crate::traits::HistoryStore;
use crate::types::History;

#[derive(Clone, Default)]
pub struct MemoryHistoryStore {
    entries: Arc<RwLock<HashMap<String, History>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn get(&self, key: &str) -> PosterResult<Option<History>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, history: &History) -> PosterResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), history.clone());
        Ok(())
    }
}
