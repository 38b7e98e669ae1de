//! Client library for the Hungarian financial news site
//! [portfolio.hu](https://www.portfolio.hu).
//!
//! The crate does three things:
//!
//! 1. **Validate** that a URL addresses an article on the site
//!    ([`is_valid_article_url`] / [`validate_article_url`]) — the host must
//!    be `portfolio.hu` or `www.portfolio.hu`, and the path must either be a
//!    legacy `hir.php` address or start with one of the site's menu
//!    categories.
//! 2. **Load** an article: [`ArticleEndpoint`] holds a validated address and
//!    a fetch capability, fetches the page once per call, and parses the
//!    HTML into an [`Article`].
//! 3. **Scan** any page of the site for article links
//!    ([`scan_article_links`]).
//!
//! Everything is synchronous and blocking; a single [`ArticleEndpoint`]
//! performs one fetch per [`load`](ArticleEndpoint::load) with no caching or
//! retries. Parallelism across articles, if wanted, is the caller's to
//! arrange — instances are independent.
//!
//! ```no_run
//! use portfolio_hu::ArticleEndpoint;
//! use url::Url;
//!
//! # fn main() -> portfolio_hu::Result<()> {
//! let address = Url::parse("https://www.portfolio.hu/gazdasag/cikk-654321").unwrap();
//! let endpoint = ArticleEndpoint::new(address)?;
//! let article = endpoint.load()?;
//! println!("{} ({} bekezdés)", article.title, article.body.len());
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod deserializer;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod scan;

pub use article::Article;
pub use endpoint::{is_valid_article_url, validate_article_url, ArticleEndpoint};
pub use error::{DeserializeError, FetchError, PortfolioError, RejectReason, Result};
pub use fetch::{FetchPage, WebClient};
pub use scan::scan_article_links;
