//! Error types for the portfolio.hu client.
//!
//! The crate surfaces three layers of failure, matching the three things it
//! does: address validation ([`RejectReason`]), page fetching
//! ([`FetchError`]) and article parsing ([`DeserializeError`]).
//! [`PortfolioError`] is the top-level type callers see; fetch errors pass
//! through it untouched while parse errors are wrapped with the address that
//! failed.

use thiserror::Error;
use url::Url;

/// Why a URL was rejected by the article-address validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Host is neither `portfolio.hu` nor `www.portfolio.hu`.
    #[error("host does not belong to portfolio.hu")]
    ForeignHost,
    /// Path has fewer than three segments and no `hir.php` marker.
    #[error("path is too short to address an article")]
    TooFewSegments,
    /// Second path segment names no known menu category.
    #[error("path does not start with a known menu category")]
    UnknownMenu,
}

/// Errors produced by the page-fetch capability.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, timeout, body decoding.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {status} for {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// Address the request was sent to.
        url: Url,
    },
}

/// Errors produced while deserializing article HTML.
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// Neither the article heading nor the `og:title` meta tag is present.
    #[error("document has no article title")]
    MissingTitle,
    /// The article body contains no paragraphs.
    #[error("document has no article body paragraphs")]
    EmptyBody,
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The supplied URL failed article-address validation. Raised at
    /// endpoint construction; the endpoint is never created.
    #[error("URL {url} is not a valid article ({reason})")]
    InvalidAddress {
        /// The offending URL.
        url: Url,
        /// Which validation rule rejected it.
        reason: RejectReason,
    },

    /// The fetched page could not be parsed into an article. The parse
    /// error is preserved as the cause.
    #[error("can't parse article with URL {url}")]
    LoadFailure {
        /// Address of the page that failed to parse.
        url: Url,
        /// The underlying deserializer error.
        #[source]
        source: DeserializeError,
    },

    /// Fetch-capability failure, passed through unwrapped.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Result type alias using [`PortfolioError`].
pub type Result<T> = std::result::Result<T, PortfolioError>;
