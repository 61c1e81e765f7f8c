//! Utility functions for date display, markup escaping, logging and file
//! system checks.
//!
//! - Publication date/time formatting for article metadata
//! - HTML escaping for values interpolated into rendered markup
//! - String truncation for log previews of response bodies
//! - File system validation for the page output directory

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Placeholder the backend uses for an unknown publication date or time.
pub const UNAVAILABLE: &str = "N/A";

/// Format a publication date and time for display.
///
/// # Examples
///
/// ```
/// use article_feed::utils::format_date_time;
///
/// assert_eq!(format_date_time("N/A", "N/A"), "Publication date unavailable");
/// assert_eq!(format_date_time("2024-01-01", "N/A"), "2024-01-01");
/// assert_eq!(format_date_time("2024-01-01", "10:00"), "2024-01-01 at 10:00");
/// ```
pub fn format_date_time(date: &str, time: &str) -> String {
    if date == UNAVAILABLE && time == UNAVAILABLE {
        return "Publication date unavailable".to_string();
    }
    if time == UNAVAILABLE {
        return date.to_string();
    }
    format!("{date} at {time}")
}

/// Escape a string for use as HTML text or a double-quoted attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last character boundary at or before `max`
/// bytes, with an ellipsis and the dropped byte count appended.
///
/// # Examples
///
/// ```
/// use article_feed::utils::truncate_for_log;
///
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
