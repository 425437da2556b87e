//! Candidate loading from stdin, a file, or a URL
//!
//! The source must be a JSON array of objects. Parse failures are load
//! errors; an entry without a string `id` is a malformed-candidate error
//! and aborts the run rather than being skipped, since silently dropping
//! entries could mask data corruption.

use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::io::AsyncReadExt;
use tracing::debug;
use url::Url;

use crate::error::{PosterError, PosterResult};
use crate::traits::CandidateSource;
use crate::types::Candidate;

/// Where the candidate bytes come from.
///
/// `-` means stdin, anything starting with `http://` or `https://` is
/// fetched, everything else is a file path.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceLocation {
    Stdin,
    File(PathBuf),
    Url(Url),
}

impl FromStr for SourceLocation {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(SourceLocation::Stdin);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|err| PosterError::ConfigError {
                message: format!("invalid source URL {s:?}: {err}"),
            })?;
            return Ok(SourceLocation::Url(url));
        }
        Ok(SourceLocation::File(PathBuf::from(s)))
    }
}

pub struct JsonCandidateSource {
    location: SourceLocation,
    client: reqwest::Client,
}

impl JsonCandidateSource {
    pub fn new(location: SourceLocation) -> Self {
        Self {
            location,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_bytes(&self) -> PosterResult<Vec<u8>> {
        match &self.location {
            SourceLocation::Stdin => {
                let mut buf = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut buf)
                    .await
                    .map_err(|err| PosterError::SourceLoadError {
                        message: format!("reading stdin: {err}"),
                    })?;
                Ok(buf)
            }
            SourceLocation::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|err| PosterError::SourceLoadError {
                        message: format!("reading {}: {err}", path.display()),
                    })
            }
            SourceLocation::Url(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .map_err(|err| PosterError::SourceLoadError {
                        message: format!("fetching {url}: {err}"),
                    })?;

                if !response.status().is_success() {
                    return Err(PosterError::SourceLoadError {
                        message: format!("fetching {url}: HTTP {}", response.status()),
                    });
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|err| PosterError::SourceLoadError {
                        message: format!("reading body of {url}: {err}"),
                    })?;
                Ok(bytes.to_vec())
            }
        }
    }
}

#[async_trait]
impl CandidateSource for JsonCandidateSource {
    async fn load(&self) -> PosterResult<Vec<Candidate>> {
        let bytes = self.fetch_bytes().await?;

        let raw: Vec<Map<String, Value>> =
            serde_json::from_slice(&bytes).map_err(|err| PosterError::SourceLoadError {
                message: format!("source is not a JSON array of objects: {err}"),
            })?;

        debug!("parsed {} raw candidate entries", raw.len());

        raw.into_iter()
            .enumerate()
            .map(|(index, fields)| Candidate::from_fields(index, fields))
            .collect()
    }
}
