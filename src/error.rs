//! Error types for fetching and rendering article feeds.
//!
//! Only transport, decode and malformed-response errors can interrupt a
//! render pass. Configuration errors surface before any pass starts.

use thiserror::Error;

/// Errors produced while loading configuration or fetching an endpoint.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response from {endpoint} is neither an article list nor an error object: {detail}")]
    Malformed { endpoint: String, detail: String },

    #[error("No element with id `{0}` in the host page")]
    MissingContainer(String),

    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FeedError {
    /// Wrap a transport-level failure for `endpoint`.
    pub fn transport<E>(endpoint: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            endpoint: endpoint.to_string(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
