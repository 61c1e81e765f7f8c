//! # Article Feed
//!
//! Fetches article feeds from a news backend and renders them as HTML cards
//! into the display container of a host page.
//!
//! ## Features
//!
//! - Queries a fixed, ordered list of feed endpoints one after another
//! - Renders each article as an escaped HTML card, and endpoint-reported
//!   errors as inline notices
//! - Abandons the rest of a pass on the first transport or decode failure,
//!   or optionally isolates failures per endpoint
//! - Writes the finished host page to disk
//!
//! ## Usage
//!
//! ```no_run
//! use article_feed::api::HttpEndpointClient;
//! use article_feed::feed::ArticleFeedRenderer;
//! use article_feed::outputs::page::HostPage;
//!
//! # async fn run() -> Result<(), article_feed::error::FeedError> {
//! let client = HttpEndpointClient::new("http://127.0.0.1:5000")?;
//! let renderer = ArticleFeedRenderer::new(client);
//! let mut page = HostPage::new("Financial News", "articles");
//! let report = renderer.fetch_all_articles(&mut page).await;
//! println!("{} articles", report.articles_rendered);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod outputs;
pub mod utils;
