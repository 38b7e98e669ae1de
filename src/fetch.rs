//! Generic page-fetch capability.
//!
//! [`FetchPage`] is the seam between endpoints and the network: an endpoint
//! composes over any implementation, and tests substitute canned bodies for
//! live requests. [`WebClient`] is the production implementation, a blocking
//! HTTP client with a fixed user agent and request timeout.
//!
//! Failure modes of the network — transport errors and non-2xx responses —
//! belong to this module and surface as [`FetchError`]. Callers higher up
//! pass them through without adding handling of their own.

use crate::error::FetchError;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Per-request timeout for the production client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Capability to fetch a page body as text.
pub trait FetchPage {
    /// Fetch `address` and return the response body.
    fn fetch(&self, address: &Url) -> Result<String, FetchError>;
}

/// Blocking HTTP client for portfolio.hu pages.
#[derive(Debug, Clone)]
pub struct WebClient {
    client: reqwest::blocking::Client,
}

impl WebClient {
    /// Build a client with the crate user agent and a 30 second timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl FetchPage for WebClient {
    #[instrument(level = "debug", skip_all, fields(url = %address))]
    fn fetch(&self, address: &Url) -> Result<String, FetchError> {
        let response = self.client.get(address.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Request answered with non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: address.clone(),
            });
        }

        let body = response.text()?;
        debug!(bytes = body.len(), "Fetched page body");
        Ok(body)
    }
}
