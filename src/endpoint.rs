//! Article endpoint for portfolio.hu: URL validation and loading.
//!
//! Validation is a pure, free-standing rule set over the address, usable
//! without constructing anything:
//!
//! 1. the host must be `portfolio.hu` or `www.portfolio.hu`;
//! 2. a path containing `hir.php` is an article outright (legacy URLs);
//! 3. otherwise the path needs at least three segments, counted the way
//!    `System.Uri.Segments` counts them (see [`uri_segments`] below), and the
//!    second segment must name one of the site's menu categories.
//!
//! [`ArticleEndpoint`] ties a validated address to a fetch capability.
//! Construction is the only gate: once an endpoint exists its address is
//! immutable, so validity is a permanent property of the instance.

use crate::article::Article;
use crate::deserializer;
use crate::error::{PortfolioError, RejectReason, Result};
use crate::fetch::{FetchPage, WebClient};
use tracing::{debug, info, instrument};
use url::Url;

/// Menu categories whose articles live directly under the site root. Each
/// entry keeps its trailing slash so it compares equal to a raw path segment.
const MENUS: [&str; 10] = [
    "befektetes/",
    "finanszirozas/",
    "deviza-kotveny/",
    "ingatlan/",
    "gazdasag/",
    "vallalatok/",
    "unios-forrasok/",
    "short/",
    "prof/",
    "impakt/",
];

/// Split a path the way `System.Uri.Segments` does: the root `/` is its own
/// segment and every interior component keeps its trailing slash, so
/// `/a/b/c` becomes `["/", "a/", "b/", "c"]` and `/a/` becomes `["/", "a/"]`.
///
/// `url::Url::path_segments()` strips the slashes and would miscount here;
/// the validation rules are defined over this convention.
pub(crate) fn uri_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (index, ch) in path.char_indices() {
        if ch == '/' {
            segments.push(&path[start..=index]);
            start = index + 1;
        }
    }
    if start < path.len() {
        segments.push(&path[start..]);
    }

    segments
}

/// Check an address against the article rules, reporting why it fails.
///
/// Pure function, no side effects; [`ArticleEndpoint`] construction applies
/// it, and [`scan_article_links`](crate::scan::scan_article_links) uses it as
/// a filter.
pub fn validate_article_url(address: &Url) -> std::result::Result<(), RejectReason> {
    match address.host_str() {
        Some("portfolio.hu") | Some("www.portfolio.hu") => {}
        _ => return Err(RejectReason::ForeignHost),
    }

    // Legacy article URLs carry the script name; they validate regardless of
    // segment count.
    if address.path().contains("hir.php") {
        return Ok(());
    }

    let segments = uri_segments(address.path());
    if segments.len() < 3 {
        return Err(RejectReason::TooFewSegments);
    }

    if MENUS.contains(&segments[1]) {
        Ok(())
    } else {
        Err(RejectReason::UnknownMenu)
    }
}

/// True when the address passes [`validate_article_url`].
pub fn is_valid_article_url(address: &Url) -> bool {
    validate_article_url(address).is_ok()
}

/// A validated handle to a single portfolio.hu article page.
///
/// [`load`](Self::load) fetches and parses the page on every call; nothing
/// is cached or retried. Instances hold no shared mutable state, so distinct
/// endpoints can be used from different threads without coordination.
#[derive(Debug)]
pub struct ArticleEndpoint<C = WebClient> {
    address: Url,
    client: C,
}

impl ArticleEndpoint<WebClient> {
    /// Create an endpoint backed by a fresh [`WebClient`].
    ///
    /// Fails with [`PortfolioError::InvalidAddress`] when the URL is not an
    /// article address.
    pub fn new(address: Url) -> Result<Self> {
        let client = WebClient::new()?;
        Self::with_client(address, client)
    }
}

impl<C: FetchPage> ArticleEndpoint<C> {
    /// Create an endpoint over an existing fetch capability.
    pub fn with_client(address: Url, client: C) -> Result<Self> {
        if let Err(reason) = validate_article_url(&address) {
            return Err(PortfolioError::InvalidAddress {
                url: address,
                reason,
            });
        }
        Ok(Self { address, client })
    }

    /// The validated article address.
    pub fn address(&self) -> &Url {
        &self.address
    }

    /// Fetch the article page and parse it.
    ///
    /// A single attempt: fetch failures pass through as
    /// [`PortfolioError::Fetch`], and a page that does not parse becomes
    /// [`PortfolioError::LoadFailure`] with the parse error as its cause.
    #[instrument(level = "info", skip_all, fields(url = %self.address))]
    pub fn load(&self) -> Result<Article> {
        let body = self.client.fetch(&self.address)?;
        debug!(bytes = body.len(), "Fetched article page");

        let article =
            deserializer::deserialize(&body, &self.address).map_err(|source| {
                PortfolioError::LoadFailure {
                    url: self.address.clone(),
                    source,
                }
            })?;

        info!(title = %article.title, paragraphs = article.body.len(), "Loaded article");
        Ok(article)
    }
}
