//! HTTP fetcher implementation
//!
//! Issues exactly one GET per host, following redirects automatically, with a
//! fixed per-request timeout. There is no retry logic: a failed fetch is an
//! isolated per-host outcome, not something to recover from.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
// `::url` disambiguates the crate from our own url module
use ::url::Url;

/// A successfully fetched root page
#[derive(Debug)]
pub struct FetchedPage {
    /// Final URL after all redirects; base for link resolution
    pub final_url: Url,

    /// Full response body as text
    pub body: String,

    /// True when the final URL differs from the requested one
    pub redirected: bool,
}

/// Why a fetch failed
///
/// Carries the underlying cause; the worker that owns the fetch pairs it with
/// the host when reporting. Never propagated past the worker boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(reqwest::Error),
}

impl FetchError {
    fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(error)
        }
    }
}

/// Builds the HTTP client shared by all host workers
///
/// Redirects are followed by reqwest's default policy (up to 10 hops); the
/// fetcher only observes the final URL, which is all link resolution needs.
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page and returns its final URL and body
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - A normalized host URL (scheme already present)
///
/// # Errors
///
/// * `FetchError::Timeout` - the request exceeded the client timeout
/// * `FetchError::Status` - the server answered with a non-success status
/// * `FetchError::Transport` - connection, TLS, or body-read failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let final_url = response.url().clone();

    // Compare against the parsed form of the request URL so that trivial
    // differences like a trailing slash added by the parser do not count
    // as a redirect.
    let redirected = match Url::parse(url) {
        Ok(requested) => requested != final_url,
        Err(_) => true,
    };

    let body = response.text().await.map_err(FetchError::from_reqwest)?;

    Ok(FetchedPage {
        final_url,
        body,
        redirected,
    })
}
