//! Publishing service clients
//!
//! `HttpPublisher` makes exactly one POST per run with no internal retry;
//! any failure aborts the run before the history is touched.
//! `NoopPublisher` stands in for it in mock mode.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::error::{PosterError, PosterResult};
use crate::traits::Publisher;

pub struct HttpPublisher {
    client: reqwest::Client,
    endpoint: Url,
    access_token: String,
}

impl HttpPublisher {
    pub fn new(endpoint: Url, access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, text: &str) -> PosterResult<()> {
        debug!("posting {} characters to {}", text.len(), self.endpoint);

        let body = serde_json::json!({ "status": text });
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|err| PosterError::PublishError {
                status: None,
                message: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match status.as_u16() {
            401 | 403 => "publish service rejected the access token".to_string(),
            429 => "publish service rate limit exceeded".to_string(),
            code => format!("publish service returned HTTP {code}"),
        };
        Err(PosterError::PublishError {
            status: Some(status.as_u16()),
            message,
        })
    }
}

/// Mock-mode publisher: logs the would-be post and succeeds without any
/// network effect.
#[derive(Default)]
pub struct NoopPublisher;

impl NoopPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Publisher for NoopPublisher {
    async fn publish(&self, text: &str) -> PosterResult<()> {
        info!("mock publish: {text:?}");
        Ok(())
    }
}
