//! Where collections come from
//!
//! [`CollectionSource`] is the seam between the view and the network. The
//! HTTP implementation performs the single `GET` against the configured
//! endpoint; tests substitute their own sources.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{BrowserError, BrowserResult};
use crate::model::{self, Collection};

/// Anything able to produce the normalized collection list
#[async_trait]
pub trait CollectionSource: Send + Sync {
    async fn fetch_collections(&self) -> BrowserResult<Vec<Collection>>;
}

/// Reads collections from an HTTP endpoint
pub struct HttpCollectionSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCollectionSource {
    /// Build a source for the endpoint in `config`
    pub fn new(config: &Config) -> BrowserResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BrowserError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CollectionSource for HttpCollectionSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_collections(&self) -> BrowserResult<Vec<Collection>> {
        debug!("requesting collections");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| BrowserError::transport(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowserError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BrowserError::transport(&self.endpoint, e))?;
        let body: Value = serde_json::from_slice(&bytes)?;

        let collections = model::normalize(&body);
        debug!(count = collections.len(), "collections normalized");
        Ok(collections)
    }
}
