//! reqwest-backed transport that turns every failure into a reported [`Fetch::Failure`].

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::sync::Arc;

use super::outcome::{FailureKind, Fetch, Response};
use crate::report::Reporter;

/// Performs one GET and classifies the outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// GETs `base_url` followed by `path` (plain concatenation, no slash handling).
    ///
    /// Never fails: errors are reported once and returned as [`Fetch::Failure`].
    async fn get(&self, base_url: &str, path: &str) -> Fetch;
}

/// HTTP transport with no retry and no implicit timeout.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    reporter: Arc<dyn Reporter>,
}

impl HttpClient {
    /// Creates a transport wrapping the given reqwest Client.
    pub fn new(client: Client, reporter: Arc<dyn Reporter>) -> Self {
        Self { client, reporter }
    }

    async fn send(&self, url: &str) -> Result<Response, FailureKind> {
        let response = self.client.get(url).send().await.map_err(|e| {
            debug!("GET {} failed: {}", url, e);
            FailureKind::classify(&e)
        })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(FailureKind::Http);
        }

        let body = response.text().await.map_err(|e| {
            debug!("Failed to read body of {}: {}", url, e);
            FailureKind::Request
        })?;

        Ok(Response::new(status, body))
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[tracing::instrument(skip(self))]
    async fn get(&self, base_url: &str, path: &str) -> Fetch {
        let url = format!("{}{}", base_url, path);

        match self.send(&url).await {
            Ok(response) => Fetch::Success(response),
            Err(kind) => {
                self.reporter.warn(kind.message());
                Fetch::Failure(kind)
            }
        }
    }
}
