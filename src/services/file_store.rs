//! File-backed history store
//!
//! One JSON file per history key under a base directory. Writes go to a
//! sibling temp file first and are moved into place with a rename, so a
//! crash mid-write can never truncate an existing history.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{PosterError, PosterResult};
use crate::traits::HistoryStore;
use crate::types::History;

pub struct FileHistoryStore {
    base_dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn history_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    fn store_err(context: &str, err: impl std::fmt::Display) -> PosterError {
        PosterError::StoreError {
            message: format!("{context}: {err}"),
        }
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn get(&self, key: &str) -> PosterResult<Option<History>> {
        let path = self.history_path(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no history at {}", path.display());
                return Ok(None);
            }
            Err(err) => return Err(Self::store_err(&format!("reading {}", path.display()), err)),
        };

        let history = serde_json::from_slice(&bytes)
            .map_err(|err| Self::store_err(&format!("parsing {}", path.display()), err))?;
        Ok(Some(history))
    }

    async fn set(&self, key: &str, history: &History) -> PosterResult<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|err| Self::store_err("creating store directory", err))?;

        let path = self.history_path(key);
        let tmp_path = self.base_dir.join(format!("{key}.json.tmp"));

        let bytes = serde_json::to_vec_pretty(history)
            .map_err(|err| Self::store_err("serializing history", err))?;

        fs::write(&tmp_path, &bytes)
            .await
            .map_err(|err| Self::store_err(&format!("writing {}", tmp_path.display()), err))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|err| Self::store_err(&format!("replacing {}", path.display()), err))?;

        debug!("wrote {} history entries to {}", history.len(), path.display());
        Ok(())
    }
}
