//! Remote snapshot source.
//!
//! On first run the store seeds itself from a read-only endpoint that
//! returns the full snapshot as one JSON document. There is deliberately
//! no retry and no deadline here; the caller decides whether to try again.

use async_trait::async_trait;

use crate::core::{Result, Snapshot, StoreError};

/// Read-only source of the initial snapshot.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the full initial snapshot in a single read.
    async fn fetch_initial_data(&self) -> Result<Snapshot>;
}

/// HTTP source reading a JSON document shaped as a snapshot.
///
/// A transport failure or non-success status surfaces as
/// [`StoreError::SourceUnavailable`]; a response that arrives but does not
/// parse as a snapshot surfaces as [`StoreError::InvalidPayload`], so the
/// two failure modes stay distinguishable to the caller.
pub struct HttpRemoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch_initial_data(&self) -> Result<Snapshot> {
        let response = self.client.get(self.url.as_str()).send().await.map_err(|e| {
            StoreError::SourceUnavailable(format!("Request to {} failed: {}", self.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::SourceUnavailable(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        let body = response.text().await.map_err(|e| {
            StoreError::SourceUnavailable(format!("Failed to read response body: {}", e))
        })?;
        let snapshot = serde_json::from_str(&body).map_err(|e| {
            StoreError::InvalidPayload(format!("Response is not a snapshot: {}", e))
        })?;
        Ok(snapshot)
    }
}

/// Source that serves a fixed snapshot from memory.
///
/// Useful for offline operation, demos and tests that should not touch
/// the network.
#[derive(Clone, Default)]
pub struct StaticRemoteSource {
    snapshot: Snapshot,
}

impl StaticRemoteSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl RemoteSource for StaticRemoteSource {
    async fn fetch_initial_data(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }
}
