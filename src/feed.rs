//! The article feed renderer.
//!
//! A pass walks the configured endpoints strictly in order, awaiting each
//! response before issuing the next request, so articles from endpoint N
//! always precede those from endpoint N+1. There is no timeout, retry or
//! cancellation; a stalled endpoint delays everything after it.
//!
//! # Failure handling
//!
//! | Outcome | Rendering | Remaining endpoints |
//! |---------|-----------|---------------------|
//! | Article list | one card per article | processed |
//! | `{"error": ...}` body | `<p>` with the error text | processed |
//! | Transport / invalid JSON / malformed body | nothing (logged) | skipped under [`FailurePolicy::AbortRemaining`] |
//!
//! Under [`FailurePolicy::IsolatePerEndpoint`] the last row instead renders
//! an inline notice and processing continues.

use crate::api::EndpointClient;
use crate::error::{FeedError, Result};
use crate::models::EndpointResult;
use crate::outputs::cards::{render_cards, render_error_notice};
use crate::outputs::page::{DEFAULT_CONTAINER_ID, DisplayContainer, HostPage};
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

/// Endpoints queried by default, in rendering order.
pub const DEFAULT_ENDPOINTS: [&str; 4] = [
    "/fetch-hindu-news",
    "/fetch-mint-news",
    "/fetch-financial-news",
    "/fetch-news18-news",
];

/// What to do when an endpoint cannot be fetched or decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Log the failure and skip every endpoint that has not run yet.
    #[default]
    AbortRemaining,
    /// Render an inline notice for the failed endpoint and keep going.
    IsolatePerEndpoint,
}

/// Summary of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Number of endpoints a request was issued for.
    pub endpoints_attempted: usize,
    /// Number of cards appended to the container.
    pub articles_rendered: usize,
    /// Number of inline error paragraphs appended to the container.
    pub error_notices: usize,
    /// Endpoint whose failure ended the pass early, if any.
    pub aborted_at: Option<String>,
    /// Whether the display container was found in the page.
    pub container_found: bool,
}

/// Fetches every configured endpoint and renders the results into a page.
#[derive(Debug, Clone)]
pub struct ArticleFeedRenderer<C> {
    client: C,
    endpoints: Vec<String>,
    container_id: String,
    policy: FailurePolicy,
}

impl<C: EndpointClient> ArticleFeedRenderer<C> {
    /// Create a renderer over [`DEFAULT_ENDPOINTS`] writing into the
    /// `articles` container.
    pub fn new(client: C) -> Self {
        Self {
            client,
            endpoints: DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Clear the display container and refill it from every endpoint.
    ///
    /// Never fails: problems are logged and reflected in the returned
    /// [`PassReport`]. Content appended before an aborting failure stays in
    /// the container.
    #[instrument(
        level = "info",
        skip_all,
        fields(container = %self.container_id, endpoints = self.endpoints.len(), policy = ?self.policy)
    )]
    pub async fn fetch_all_articles(&self, page: &mut HostPage) -> PassReport {
        let mut report = PassReport::default();

        let container = match page.container_mut(&self.container_id) {
            Ok(container) => container,
            Err(e) => {
                error!(error = %e, "Error fetching articles");
                return report;
            }
        };
        report.container_found = true;
        container.clear();

        for endpoint in &self.endpoints {
            report.endpoints_attempted += 1;

            match self.fetch_endpoint(endpoint).await {
                Ok(EndpointResult::Failure(message)) => {
                    warn!(%endpoint, error = %message, "Endpoint reported an error");
                    container.append(&render_error_notice(&message));
                    report.error_notices += 1;
                }
                Ok(EndpointResult::Articles(articles)) => {
                    debug!(%endpoint, count = articles.len(), "Rendering articles");
                    container.append(&render_cards(&articles));
                    report.articles_rendered += articles.len();
                }
                Err(e) => {
                    if self.handle_failure(endpoint, &e, container, &mut report) {
                        return report;
                    }
                }
            }
        }

        info!(
            articles = report.articles_rendered,
            error_notices = report.error_notices,
            "Rendered all endpoints"
        );
        report
    }

    /// Returns `true` when the pass must stop.
    fn handle_failure(
        &self,
        endpoint: &str,
        e: &FeedError,
        container: &mut DisplayContainer,
        report: &mut PassReport,
    ) -> bool {
        match self.policy {
            FailurePolicy::AbortRemaining => {
                error!(
                    %endpoint,
                    error = %e,
                    skipped = self.endpoints.len() - report.endpoints_attempted,
                    "Error fetching articles; skipping remaining endpoints"
                );
                report.aborted_at = Some(endpoint.to_string());
                true
            }
            FailurePolicy::IsolatePerEndpoint => {
                error!(%endpoint, error = %e, "Error fetching articles; continuing with next endpoint");
                container.append(&render_error_notice(&format!(
                    "Could not load articles from {endpoint}."
                )));
                report.error_notices += 1;
                false
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch_endpoint(&self, endpoint: &str) -> Result<EndpointResult> {
        let body = self.client.get(endpoint).await?;
        let value: Value = serde_json::from_str(&body).map_err(|source| {
            debug!(body_preview = %truncate_for_log(&body, 300), "Body is not JSON");
            FeedError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;
        EndpointResult::from_value(endpoint, value)
    }
}
