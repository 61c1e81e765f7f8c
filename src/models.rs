//! Data models for the article feed.
//!
//! - [`Article`]: one news item as returned by a feed endpoint
//! - [`EndpointResult`]: the decoded outcome of a single endpoint request
//!
//! Endpoints answer with either a JSON array of articles or an object of
//! the form `{"error": "..."}`. The classification below follows the
//! truthiness rules of the page script the backend was written for: an
//! `error` member counts only when it is truthy.

use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A news item produced by a feed endpoint.
///
/// Articles carry no identity beyond their position in the response list
/// and are never modified after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    /// The article headline.
    pub headline: String,
    /// A short summary of the article body.
    pub summary: String,
    /// Human-readable name of the publication (e.g. "Mint").
    pub source: String,
    /// Link to the full article.
    pub url: String,
}

/// What a single endpoint request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointResult {
    /// Articles in the order the endpoint returned them.
    Articles(Vec<Article>),
    /// The endpoint reported that it could not produce articles.
    Failure(String),
}

impl EndpointResult {
    /// Classify a decoded JSON body returned by `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Malformed`] when the body is neither an object
    /// with a truthy `error` member nor an array of well-formed articles.
    pub fn from_value(endpoint: &str, value: Value) -> Result<Self> {
        if let Some(error) = value.get("error").filter(|v| is_truthy(v)) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Failure(message));
        }

        match value {
            Value::Array(_) => serde_json::from_value::<Vec<Article>>(value)
                .map(Self::Articles)
                .map_err(|e| FeedError::Malformed {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }),
            other => Err(FeedError::Malformed {
                endpoint: endpoint.to_string(),
                detail: format!("unexpected {} body", json_kind(&other)),
            }),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
