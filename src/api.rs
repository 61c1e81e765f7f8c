//! HTTP access to the feed endpoints.
//!
//! The renderer talks to the backend through the [`EndpointClient`] trait so
//! that a pass can run against the real server ([`HttpEndpointClient`]) or an
//! in-memory stand-in in tests.
//!
//! Requests are plain `GET`s with default headers. The HTTP status is logged
//! but never turned into an error: the backend reports per-feed failures as
//! `500` responses carrying an `{"error": ...}` body, and that body must
//! still reach the renderer.

use crate::error::{FeedError, Result};
use std::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

/// Fetches the raw body of a feed endpoint.
pub trait EndpointClient {
    /// Issue a `GET` for `endpoint` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] when the request cannot be completed
    /// and [`FeedError::InvalidUrl`] when `endpoint` does not resolve.
    async fn get(&self, endpoint: &str) -> Result<String>;
}

/// [`EndpointClient`] backed by `reqwest`, resolving endpoint paths against a
/// base URL.
#[derive(Debug, Clone)]
pub struct HttpEndpointClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpEndpointClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_client(reqwest::Client::new(), Url::parse(base_url)?))
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }
}

impl EndpointClient for HttpEndpointClient {
    #[instrument(level = "info", skip(self), fields(base_url = %self.base_url))]
    async fn get(&self, endpoint: &str) -> Result<String> {
        let t0 = Instant::now();
        let url = self.resolve(endpoint)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::transport(endpoint, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FeedError::transport(endpoint, e))?;
        let dt = t0.elapsed();

        if status.is_success() {
            debug!(
                %status,
                bytes = body.len(),
                elapsed_ms = dt.as_millis(),
                "Fetched endpoint"
            );
        } else {
            warn!(
                %status,
                bytes = body.len(),
                elapsed_ms = dt.as_millis(),
                "Endpoint answered with a non-success status; decoding body anyway"
            );
        }
        Ok(body)
    }
}
