//! HTTP fetch client with dependency tagging.

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use storefront_observability::StructuredLogger;

use crate::dependency::DependencyTag;

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

/// Outbound JSON fetch client.
///
/// Uses the browser's `fetch` on wasm32 and a native HTTP stack elsewhere.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    logger: StructuredLogger,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new(logger: &StructuredLogger) -> Self {
        Self {
            http: reqwest::Client::new(),
            logger: logger.for_component("fetch"),
        }
    }

    /// GET `url` and decode the JSON body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        tag: DependencyTag,
    ) -> Result<T, FetchError> {
        self.logger
            .debug_builder("fetch start")
            .field("dependency", tag.name())
            .field("url", url)
            .emit();

        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        let result: T = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;

        self.logger
            .debug_builder("fetch complete")
            .field("dependency", tag.name())
            .field_i64("bytes", bytes.len() as i64)
            .emit();

        Ok(result)
    }
}
