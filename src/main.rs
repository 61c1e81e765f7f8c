//! # Article Feed
//!
//! Renders the news backend's article feeds into a static HTML page.
//!
//! ## Usage
//!
//! ```sh
//! article_feed --base-url http://127.0.0.1:5000 -o ./public/index.html
//! ```
//!
//! ## Flow
//!
//! 1. **Configuration**: `.env`, optional YAML file, then CLI flags
//! 2. **Preflight**: ensure the output directory is writable
//! 3. **Render pass**: fetch every endpoint in order into the page container
//! 4. **Output**: write the host page

use article_feed::api::HttpEndpointClient;
use article_feed::config::FeedConfig;
use article_feed::feed::ArticleFeedRenderer;
use article_feed::outputs::page::{HostPage, write_page};
use article_feed::utils::ensure_writable_dir;
use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("article_feed starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => FeedConfig::load(path).await?,
        None => FeedConfig::default(),
    };
    let config = args.apply(config);
    info!(
        base_url = %config.base_url,
        endpoints = ?config.endpoints,
        policy = ?config.failure_policy,
        "Configuration resolved"
    );

    // Early check: ensure the page directory is writable
    let output_dir = args
        .output
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if let Err(e) = ensure_writable_dir(output_dir).await {
        error!(
            path = %output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let client = HttpEndpointClient::new(&config.base_url)?;
    let renderer = ArticleFeedRenderer::new(client)
        .with_endpoints(config.endpoints.clone())
        .with_container_id(config.container_id.clone())
        .with_policy(config.failure_policy);

    let mut page = HostPage::new(config.page_title.clone(), config.container_id.clone());
    let report = renderer.fetch_all_articles(&mut page).await;
    info!(
        attempted = report.endpoints_attempted,
        articles = report.articles_rendered,
        error_notices = report.error_notices,
        aborted_at = ?report.aborted_at,
        "Render pass finished"
    );

    if let Err(e) = write_page(&page, &args.output).await {
        error!(path = %args.output.display(), error = %e, "Failed writing host page");
        return Err(e);
    }
    info!(path = %args.output.display(), "Wrote host page");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
