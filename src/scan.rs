//! Article-link discovery on portfolio.hu pages.
//!
//! The front page and the section pages link articles with a mix of relative
//! and absolute hrefs. Scanning resolves every anchor against the page URL
//! and keeps the ones that pass article-address validation, so the output
//! feeds straight into [`ArticleEndpoint`](crate::ArticleEndpoint)
//! construction.

use crate::endpoint::is_valid_article_url;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info};
use url::Url;

static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Collect every article link on a fetched page.
///
/// Relative hrefs resolve against `base`. Links that fail validation are
/// dropped, and duplicates collapse to their first occurrence, preserving
/// document order.
pub fn scan_article_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&ANCHORS) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            debug!(href, "Skipping unresolvable href");
            continue;
        };
        if !is_valid_article_url(&resolved) {
            continue;
        }
        if seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    info!(count = links.len(), base = %base, "Scanned page for article links");
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT_PAGE: &str = r#"<html><body>
<a href="/gazdasag/rekordon-a-forint-654321">Rekordon a forint</a>
<a href="https://www.portfolio.hu/ingatlan/lakasarak-2024-123456">Lakásárak</a>
<a href="/gazdasag/rekordon-a-forint-654321">Rekordon a forint (ismét)</a>
<a href="/sport/vb-donto-99">VB döntő</a>
<a href="https://index.hu/gazdasag/masik-oldal">Másik oldal</a>
<a href="/hir.php?id=221998">Archív hír</a>
<a href="mailto:info@portfolio.hu">Kapcsolat</a>
<a href="/gazdasag">Gazdaság rovat</a>
</body></html>"#;

    #[test]
    fn test_scan_keeps_valid_links_in_document_order() {
        let base = Url::parse("https://www.portfolio.hu/").unwrap();
        let links = scan_article_links(FRONT_PAGE, &base);

        let expected = [
            "https://www.portfolio.hu/gazdasag/rekordon-a-forint-654321",
            "https://www.portfolio.hu/ingatlan/lakasarak-2024-123456",
            "https://www.portfolio.hu/hir.php?id=221998",
        ];
        let found: Vec<String> = links.iter().map(Url::to_string).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_scan_resolves_relative_against_section_page() {
        let base = Url::parse("https://www.portfolio.hu/gazdasag/").unwrap();
        let html = r#"<a href="cikk-1-777">relatív</a>"#;

        let links = scan_article_links(html, &base);
        assert_eq!(
            links,
            vec![Url::parse("https://www.portfolio.hu/gazdasag/cikk-1-777").unwrap()]
        );
    }

    #[test]
    fn test_scan_of_linkless_page_is_empty() {
        let base = Url::parse("https://www.portfolio.hu/").unwrap();
        assert!(scan_article_links("<html><body><p>nincs link</p></body></html>", &base).is_empty());
    }
}
