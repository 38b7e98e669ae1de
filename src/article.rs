//! Data model for a parsed portfolio.hu article.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A news article extracted from a portfolio.hu page.
///
/// Only `title` and `body` are guaranteed by the deserializer; the remaining
/// fields degrade to `None` or empty when the page does not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// The URL the article was loaded from.
    pub source: String,
    /// Headline.
    pub title: String,
    /// Standfirst shown under the headline, when present.
    pub lead: Option<String>,
    /// Byline, when present.
    pub author: Option<String>,
    /// Publication time as rendered by the site (local wall clock, no zone).
    pub published: Option<NaiveDateTime>,
    /// Body paragraphs in document order. Never empty on a parsed article.
    pub body: Vec<String>,
    /// Topic tags attached to the article.
    pub tags: Vec<String>,
}

impl Article {
    /// Full body text with paragraphs separated by blank lines.
    pub fn body_text(&self) -> String {
        self.body.join("\n\n")
    }
}
