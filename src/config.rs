//! Feed configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional YAML file, and command-line flags (which also read environment
//! variables).
//!
//! ```yaml
//! base_url: http://127.0.0.1:5000
//! page_title: Financial News
//! container_id: articles
//! failure_policy: isolate-per-endpoint
//! endpoints:
//!   - /fetch-hindu-news
//!   - /fetch-economic-news
//! ```

use crate::error::Result;
use crate::feed::{DEFAULT_ENDPOINTS, FailurePolicy};
use crate::outputs::page::DEFAULT_CONTAINER_ID;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Address the backend listens on when `PORT` is not overridden.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const DEFAULT_PAGE_TITLE: &str = "Financial News";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL the endpoint paths are resolved against.
    pub base_url: String,
    /// Endpoint paths, in rendering order.
    pub endpoints: Vec<String>,
    /// Id of the display container in the host page.
    pub container_id: String,
    pub failure_policy: FailurePolicy,
    pub page_title: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            failure_policy: FailurePolicy::default(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

impl FeedConfig {
    /// Load a YAML configuration file. Missing keys keep their defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&raw)?;
        info!(endpoints = config.endpoints.len(), "Loaded feed configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
