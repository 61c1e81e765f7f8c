//! Command-line interface definitions for the article feed renderer.
//!
//! All arguments can be provided via command-line flags, and most also via
//! environment variables (a `.env` file in the working directory is loaded
//! first).

use article_feed::config::FeedConfig;
use article_feed::feed::FailurePolicy;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the article feed renderer.
///
/// # Examples
///
/// ```sh
/// # Render the default feeds from a local backend
/// article_feed -o ./public/index.html
///
/// # Point at another backend and keep going past failing feeds
/// article_feed --base-url https://news.example.com --isolate-failures
///
/// # Replace the endpoint list
/// article_feed -e /fetch-economic-news -e /fetch-mint-news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news backend
    #[arg(long, env = "ARTICLE_FEED_BASE_URL")]
    pub base_url: Option<String>,

    /// Path of the rendered HTML page
    #[arg(short, long, env = "ARTICLE_FEED_OUTPUT", default_value = "./public/index.html")]
    pub output: PathBuf,

    /// Optional path to a YAML feed configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Endpoint path to query, in order (repeatable; replaces the configured list)
    #[arg(short, long = "endpoint")]
    pub endpoints: Vec<String>,

    /// Id of the display container in the host page
    #[arg(long)]
    pub container_id: Option<String>,

    /// Keep processing later endpoints when one cannot be fetched or decoded
    #[arg(long)]
    pub isolate_failures: bool,
}

impl Cli {
    /// Layer the command-line values over `config`.
    pub fn apply(&self, mut config: FeedConfig) -> FeedConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if !self.endpoints.is_empty() {
            config.endpoints = self.endpoints.clone();
        }
        if let Some(container_id) = &self.container_id {
            config.container_id = container_id.clone();
        }
        if self.isolate_failures {
            config.failure_policy = FailurePolicy::IsolatePerEndpoint;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["article_feed"]);

        assert_eq!(cli.output, PathBuf::from("./public/index.html"));
        assert!(cli.endpoints.is_empty());
        assert!(!cli.isolate_failures);

        let config = cli.apply(FeedConfig::default());
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "article_feed",
            "--base-url",
            "http://news.internal:8080",
            "-e",
            "/fetch-economic-news",
            "-e",
            "/fetch-mint-news",
            "--container-id",
            "feed",
            "--isolate-failures",
        ]);

        let config = cli.apply(FeedConfig::default());
        assert_eq!(config.base_url, "http://news.internal:8080");
        assert_eq!(config.endpoints, vec!["/fetch-economic-news", "/fetch-mint-news"]);
        assert_eq!(config.container_id, "feed");
        assert_eq!(config.failure_policy, FailurePolicy::IsolatePerEndpoint);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["article_feed", "-o", "/tmp/news.html", "-c", "/tmp/feeds.yaml"]);

        assert_eq!(cli.output, PathBuf::from("/tmp/news.html"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/feeds.yaml")));
    }
}
