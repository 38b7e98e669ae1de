//! HTML deserializer for portfolio.hu article pages.
//!
//! Extraction is selector-driven with meta-tag fallbacks:
//!
//! - title from the article `<h1>`, falling back to `og:title`
//! - lead from the lead block, falling back to the `description` meta tag
//! - byline and tags from their article blocks
//! - publication time from `<time datetime>` (RFC 3339), falling back to the
//!   Hungarian long date the site renders in text ("2024. január 5. 10:30")
//!
//! Title and body are mandatory: a document missing either fails with a
//! [`DeserializeError`] rather than producing a hollow article. Everything
//! else degrades to `None` or empty.

use crate::article::Article;
use crate::error::DeserializeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};
use url::Url;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article h1").unwrap());
static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());
static LEAD: Lazy<Selector> = Lazy::new(|| Selector::parse("article .article-lead").unwrap());
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static AUTHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("article .article-author").unwrap());
static PUBLISHED: Lazy<Selector> = Lazy::new(|| Selector::parse("article time").unwrap());
static PARAGRAPHS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article .article-body p").unwrap());
static TAGS: Lazy<Selector> = Lazy::new(|| Selector::parse("article .article-tags a").unwrap());

/// "2024. január 5. 10:30" — year, month name, day, hour, minute.
static HU_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})\.\s*([a-záéíóöőúüű]+)\s+(\d{1,2})\.\s*(\d{1,2}):(\d{2})").unwrap()
});

/// Hungarian month names, index 0 = January.
const MONTHS: [&str; 12] = [
    "január",
    "február",
    "március",
    "április",
    "május",
    "június",
    "július",
    "augusztus",
    "szeptember",
    "október",
    "november",
    "december",
];

/// Parse an article page into an [`Article`].
///
/// `source` is recorded on the result; it is not re-fetched or re-validated
/// here.
#[instrument(level = "debug", skip_all, fields(url = %source))]
pub fn deserialize(html: &str, source: &Url) -> Result<Article, DeserializeError> {
    let document = Html::parse_document(html);

    let title = select_text(&document, &TITLE)
        .or_else(|| meta_content(&document, &OG_TITLE))
        .ok_or(DeserializeError::MissingTitle)?;

    let body: Vec<String> = document
        .select(&PARAGRAPHS)
        .map(element_text)
        .filter(|p| !p.is_empty())
        .collect();
    if body.is_empty() {
        return Err(DeserializeError::EmptyBody);
    }

    let lead = select_text(&document, &LEAD).or_else(|| meta_content(&document, &DESCRIPTION));
    let author = select_text(&document, &AUTHOR);
    let published = extract_published(&document);
    let tags: Vec<String> = document
        .select(&TAGS)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();

    debug!(
        title = %title,
        paragraphs = body.len(),
        tags = tags.len(),
        has_published = published.is_some(),
        "Deserialized article"
    );

    Ok(Article {
        source: source.to_string(),
        title,
        lead,
        author,
        published,
        body,
        tags,
    })
}

/// Publication time from the first `<time>` element: the `datetime`
/// attribute when it parses as RFC 3339, otherwise the rendered Hungarian
/// date in its text, otherwise `None`.
fn extract_published(document: &Html) -> Option<NaiveDateTime> {
    let element = document.select(&PUBLISHED).next()?;

    if let Some(datetime) = element.value().attr("datetime") {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(datetime) {
            return Some(parsed.naive_local());
        }
    }

    let text = element.text().collect::<Vec<_>>().join(" ");
    parse_hungarian_datetime(&text)
}

/// Parse the site's long date format, e.g. "2024. január 5. 10:30".
pub(crate) fn parse_hungarian_datetime(text: &str) -> Option<NaiveDateTime> {
    let lowered = text.to_lowercase();
    let caps = HU_DATE.captures(&lowered)?;

    let year: i32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let day: u32 = caps[3].parse().ok()?;
    let hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

fn element_text(element: ElementRef<'_>) -> String {
    // Text nodes concatenate directly; inline markup like <strong> splits a
    // sentence into nodes that must not gain separator spaces.
    normalize_whitespace(&element.text().collect::<String>())
}

fn select_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(normalize_whitespace)
        .filter(|text| !text.is_empty())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn source() -> Url {
        Url::parse("https://www.portfolio.hu/gazdasag/rekordon-a-forint-654321").unwrap()
    }

    const FULL_ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Rekordon a forint - Portfolio.hu</title>
  <meta property="og:title" content="Rekordon a forint">
  <meta name="description" content="A forint új csúcsra erősödött.">
</head>
<body>
<article>
  <h1>Rekordon a
      forint</h1>
  <div class="article-lead">A forint új csúcsra erősödött a
      csütörtöki kereskedésben.</div>
  <div class="article-author">Portfolio</div>
  <time datetime="2024-01-05T10:30:00+01:00">2024. január 5. 10:30</time>
  <div class="article-body">
    <p>Első bekezdés a <strong>forintról</strong>.</p>
    <p>   </p>
    <p>Második bekezdés.</p>
  </div>
  <div class="article-tags">
    <a href="/cimke/forint">forint</a>
    <a href="/cimke/mnb">MNB</a>
  </div>
</article>
</body>
</html>"#;

    #[test]
    fn test_deserialize_full_article() {
        let article = deserialize(FULL_ARTICLE, &source()).unwrap();

        assert_eq!(
            article.source,
            "https://www.portfolio.hu/gazdasag/rekordon-a-forint-654321"
        );
        assert_eq!(article.title, "Rekordon a forint");
        assert_eq!(
            article.lead.as_deref(),
            Some("A forint új csúcsra erősödött a csütörtöki kereskedésben.")
        );
        assert_eq!(article.author.as_deref(), Some("Portfolio"));
        assert_eq!(
            article.published,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            article.body,
            vec!["Első bekezdés a forintról.", "Második bekezdés."]
        );
        assert_eq!(article.tags, vec!["forint", "MNB"]);
    }

    #[test]
    fn test_title_falls_back_to_og_meta() {
        let html = r#"<html>
<head><meta property="og:title" content="Meta cím"></head>
<body><article>
  <div class="article-body"><p>Bekezdés.</p></div>
</article></body>
</html>"#;

        let article = deserialize(html, &source()).unwrap();
        assert_eq!(article.title, "Meta cím");
        assert!(article.lead.is_none());
        assert!(article.published.is_none());
    }

    #[test]
    fn test_missing_title_fails() {
        let html = r#"<html><body><article>
  <div class="article-body"><p>Bekezdés cím nélkül.</p></div>
</article></body></html>"#;

        let err = deserialize(html, &source()).unwrap_err();
        assert!(matches!(err, DeserializeError::MissingTitle));
    }

    #[test]
    fn test_empty_body_fails() {
        let html = r#"<html><body><article>
  <h1>Cím bekezdések nélkül</h1>
  <div class="article-body"></div>
</article></body></html>"#;

        let err = deserialize(html, &source()).unwrap_err();
        assert!(matches!(err, DeserializeError::EmptyBody));
    }

    #[test]
    fn test_unparseable_datetime_attr_falls_back_to_text() {
        let html = r#"<html><body><article>
  <h1>Cím</h1>
  <time datetime="tegnap">2023. december 24. 8:05</time>
  <div class="article-body"><p>Bekezdés.</p></div>
</article></body></html>"#;

        let article = deserialize(html, &source()).unwrap();
        assert_eq!(
            article.published,
            NaiveDate::from_ymd_opt(2023, 12, 24).unwrap().and_hms_opt(8, 5, 0)
        );
    }

    #[test]
    fn test_unrecognizable_date_degrades_to_none() {
        let html = r#"<html><body><article>
  <h1>Cím</h1>
  <time>ma reggel</time>
  <div class="article-body"><p>Bekezdés.</p></div>
</article></body></html>"#;

        let article = deserialize(html, &source()).unwrap();
        assert!(article.published.is_none());
    }

    #[test]
    fn test_parse_hungarian_datetime() {
        assert_eq!(
            parse_hungarian_datetime("2024. január 5. 10:30"),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            parse_hungarian_datetime("Frissítve: 2021. Augusztus 19. 16:05"),
            NaiveDate::from_ymd_opt(2021, 8, 19).unwrap().and_hms_opt(16, 5, 0)
        );
        assert!(parse_hungarian_datetime("2024. holdhó 5. 10:30").is_none());
        assert!(parse_hungarian_datetime("nincs dátum").is_none());
        // Out-of-range day fails the calendar check, not the regex.
        assert!(parse_hungarian_datetime("2024. február 31. 10:30").is_none());
    }
}
