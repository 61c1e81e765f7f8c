//! Markup for article cards and inline error notices.
//!
//! Every interpolated value is HTML-escaped. A card has the shape:
//!
//! ```text
//! div.card
//! ├── h3              headline
//! ├── p               summary
//! ├── div.metadata
//! │   └── span.source "Source: {source}"
//! └── a[target=_blank] "Read More" -> url
//! ```

use crate::models::Article;
use crate::utils::escape_html;

/// Render one article as a card.
pub fn render_card(article: &Article) -> String {
    format!(
        r#"
<div class="card">
    <h3>{headline}</h3>
    <p>{summary}</p>
    <div class="metadata">
        <span class="source">Source: {source}</span>
    </div>
    <a href="{url}" target="_blank" rel="noopener noreferrer">Read More</a>
</div>
"#,
        headline = escape_html(&article.headline),
        summary = escape_html(&article.summary),
        source = escape_html(&article.source),
        url = escape_html(&article.url),
    )
}

/// Render all articles as consecutive cards, in order.
pub fn render_cards(articles: &[Article]) -> String {
    articles.iter().map(render_card).collect()
}

/// Render an error reported by an endpoint as a paragraph.
pub fn render_error_notice(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn article(headline: &str) -> Article {
        Article {
            headline: headline.to_string(),
            summary: "S".to_string(),
            source: "Src".to_string(),
            url: "http://x".to_string(),
        }
    }

    fn select_text(html: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_card_structure() {
        let html = Html::parse_fragment(&render_card(&article("H")));

        assert_eq!(select_text(&html, "div.card > h3"), vec!["H"]);
        assert_eq!(select_text(&html, "div.card > p"), vec!["S"]);
        assert_eq!(
            select_text(&html, "div.card div.metadata span.source"),
            vec!["Source: Src"]
        );

        let link_selector = Selector::parse("div.card > a").unwrap();
        let link = html.select(&link_selector).next().unwrap();
        assert_eq!(link.value().attr("href"), Some("http://x"));
        assert_eq!(link.value().attr("target"), Some("_blank"));
        assert_eq!(link.text().collect::<String>(), "Read More");
    }

    #[test]
    fn test_cards_keep_article_order() {
        let markup = render_cards(&[article("one"), article("two"), article("three")]);
        let html = Html::parse_fragment(&markup);
        assert_eq!(select_text(&html, "h3"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_no_articles_render_nothing() {
        assert_eq!(render_cards(&[]), "");
    }

    #[test]
    fn test_card_fields_are_escaped() {
        let hostile = Article {
            headline: "<script>alert(1)</script>".to_string(),
            summary: "Profits & <b>losses</b>".to_string(),
            source: "Mint".to_string(),
            url: r#"http://x" onclick="steal()"#.to_string(),
        };
        let markup = render_card(&hostile);
        let html = Html::parse_fragment(&markup);

        let script = Selector::parse("script").unwrap();
        assert_eq!(html.select(&script).count(), 0);
        let bold = Selector::parse("b").unwrap();
        assert_eq!(html.select(&bold).count(), 0);

        assert_eq!(select_text(&html, "h3"), vec!["<script>alert(1)</script>"]);
        assert_eq!(select_text(&html, "div.card > p"), vec!["Profits & <b>losses</b>"]);

        let link_selector = Selector::parse("a").unwrap();
        let link = html.select(&link_selector).next().unwrap();
        assert_eq!(link.value().attr("onclick"), None);
        assert_eq!(link.value().attr("href"), Some(r#"http://x" onclick="steal()"#));
    }

    #[test]
    fn test_error_notice() {
        assert_eq!(render_error_notice("down"), "<p>down</p>");
        assert_eq!(
            render_error_notice("<i>No headlines</i>"),
            "<p>&lt;i&gt;No headlines&lt;/i&gt;</p>"
        );
    }
}
