//! HTTP implementation of the catalog client.
//!
//! Talks to a Jikan-style REST API over `reqwest`'s blocking client. The base
//! URL, SFW filtering, and request timeout all come from configuration; the
//! timeout bounds every request so a stalled catalog cannot hang the caller
//! indefinitely.

use crate::catalog::client::{decode_detail, decode_search, CatalogClient};
use crate::domain::error::{AnimarkError, Result};
use crate::domain::{ItemDetail, ItemSummary};
use crate::Config;
use std::time::Duration;

/// Catalog client backed by a Jikan-style HTTP API.
pub struct HttpCatalogClient {
    client: reqwest::blocking::Client,
    base_url: String,
    sfw_only: bool,
}

impl HttpCatalogClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Fetch` error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AnimarkError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sfw_only: config.sfw_only,
        })
    }

    /// Sends a GET request and returns the response body.
    ///
    /// Non-success statuses are collapsed into `Fetch` errors along with
    /// transport failures, since the caller treats them identically.
    fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let _span = tracing::debug_span!("catalog_request", url = %url).entered();

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| AnimarkError::Fetch(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnimarkError::Fetch(format!("catalog returned HTTP {status}")));
        }

        response
            .text()
            .map_err(|e| AnimarkError::Fetch(format!("failed to read response body: {e}")))
    }
}

impl CatalogClient for HttpCatalogClient {
    fn search(&self, query: &str) -> Result<Vec<ItemSummary>> {
        let _span = tracing::debug_span!("catalog_search", query = %query).entered();

        let url = format!("{}/anime", self.base_url);
        // reqwest percent-encodes query pairs, so raw user text is safe here.
        let mut pairs = vec![("q", query)];
        if self.sfw_only {
            pairs.push(("sfw", "true"));
        }

        let body = self.get_text(&url, &pairs)?;
        decode_search(&body)
    }

    fn detail(&self, id: u64) -> Result<ItemDetail> {
        let _span = tracing::debug_span!("catalog_detail", id = id).entered();

        let url = format!("{}/anime/{id}", self.base_url);
        let body = self.get_text(&url, &[])?;
        decode_detail(&body)
    }
}
