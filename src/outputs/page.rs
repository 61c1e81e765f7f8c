//! The host page and its display container.
//!
//! A [`HostPage`] owns exactly one [`DisplayContainer`], found by id. The
//! renderer clears and appends to the container; the binary then writes the
//! whole page to disk as an HTML document.

use crate::error::{FeedError, Result};
use crate::utils::escape_html;
use chrono::{DateTime, Local};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Id of the container the page script writes into.
pub const DEFAULT_CONTAINER_ID: &str = "articles";

/// The node that accumulates rendered markup during a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayContainer {
    id: String,
    inner_html: String,
}

impl DisplayContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.inner_html.clear();
    }

    /// Append already-rendered markup.
    pub fn append(&mut self, markup: &str) {
        self.inner_html.push_str(markup);
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn is_empty(&self) -> bool {
        self.inner_html.is_empty()
    }
}

/// A page with a title and a single display container.
#[derive(Debug, Clone)]
pub struct HostPage {
    title: String,
    container: DisplayContainer,
}

impl HostPage {
    pub fn new(title: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            container: DisplayContainer::new(container_id),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Look up the container by id.
    pub fn container(&self, id: &str) -> Option<&DisplayContainer> {
        (self.container.id == id).then_some(&self.container)
    }

    /// Look up the container by id for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingContainer`] if the page has no element
    /// with that id.
    pub fn container_mut(&mut self, id: &str) -> Result<&mut DisplayContainer> {
        if self.container.id == id {
            Ok(&mut self.container)
        } else {
            Err(FeedError::MissingContainer(id.to_string()))
        }
    }

    /// Render the complete HTML document.
    pub fn to_html(&self, generated_at: DateTime<Local>) -> String {
        let title = escape_html(&self.title);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <p class="generated">Generated {generated}</p>
    <div id="{id}">{content}</div>
</body>
</html>
"#,
            generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
            id = escape_html(&self.container.id),
            content = self.container.inner_html,
        )
    }
}

/// Write the rendered page to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_page(page: &HostPage, path: &Path) -> std::result::Result<(), Box<dyn Error>> {
    let html = page.to_html(Local::now());

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create page directory");
            return Err(e.into());
        }
    }

    fs::write(path, html).await?;
    info!(bytes = page.container.inner_html.len(), "Wrote host page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use scraper::{Html, Selector};

    #[test]
    fn test_container_lookup_by_id() {
        let mut page = HostPage::new("Financial News", DEFAULT_CONTAINER_ID);
        assert!(page.container("articles").is_some());
        assert!(page.container("sidebar").is_none());
        assert!(page.container_mut("articles").is_ok());

        let err = page.container_mut("sidebar").unwrap_err();
        assert!(matches!(err, FeedError::MissingContainer(id) if id == "sidebar"));
    }

    #[test]
    fn test_clear_then_append() {
        let mut container = DisplayContainer::new("articles");
        container.append("<p>old</p>");
        container.clear();
        assert!(container.is_empty());

        container.append("<p>a</p>");
        container.append("<p>b</p>");
        assert_eq!(container.inner_html(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_document_contains_container_content() {
        let mut page = HostPage::new("Markets & Economy", "articles");
        page.container_mut("articles").unwrap().append("<p>down</p>");

        let generated_at = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let html = page.to_html(generated_at);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Generated 2024-01-01 10:00:00"));

        let document = Html::parse_document(&html);
        let title = Selector::parse("title").unwrap();
        assert_eq!(
            document.select(&title).next().unwrap().text().collect::<String>(),
            "Markets & Economy"
        );
        let notice = Selector::parse("#articles > p").unwrap();
        assert_eq!(
            document.select(&notice).next().unwrap().text().collect::<String>(),
            "down"
        );
    }

    #[tokio::test]
    async fn test_write_page_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("public").join("index.html");
        let page = HostPage::new("Financial News", "articles");

        write_page(&page, &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#"<div id="articles"></div>"#));
    }
}
