//! Client for the two SWAPI endpoints: the root listing and a per-category listing.

use log::debug;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::http::{Fetch, Transport};
use crate::report::Reporter;

pub const NO_CATEGORIES: &str = "No categories available. Verify the site is working correctly.";
pub const NO_CATEGORY_INFO: &str =
    "No information for the selected category. Verify the site is working correctly.";

/// A [`Transport`] bound to one API root.
pub struct CategoryClient<T: Transport> {
    transport: T,
    base_url: String,
    reporter: Arc<dyn Reporter>,
}

impl<T: Transport> CategoryClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            reporter,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the top-level keys of the root document, or `None` when the
    /// root could not be fetched or is not a JSON object.
    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> Option<BTreeSet<String>> {
        let response = match self.transport.get(&self.base_url, "").await {
            Fetch::Success(response) => response,
            Fetch::Failure(kind) => {
                debug!("Root listing at {} unavailable: {}", self.base_url, kind);
                self.reporter.warn(NO_CATEGORIES);
                return None;
            }
        };

        match response.document() {
            Ok(document) => Some(document.into_iter().map(|(key, _)| key).collect()),
            Err(e) => {
                debug!(
                    "Root listing at {} ({}) is not a JSON object: {}",
                    self.base_url,
                    response.status(),
                    e
                );
                self.reporter.warn(NO_CATEGORIES);
                None
            }
        }
    }

    /// Returns the raw body of `<base>/<name>/`, untouched.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_category(&self, name: &str) -> Option<String> {
        let path = format!("/{}/", name);

        match self.transport.get(&self.base_url, &path).await {
            Fetch::Success(response) => Some(response.into_text()),
            Fetch::Failure(kind) => {
                debug!("Category {} unavailable: {}", name, kind);
                self.reporter.warn(NO_CATEGORY_INFO);
                None
            }
        }
    }
}
