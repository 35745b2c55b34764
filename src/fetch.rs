//! Outbound HTTP retrieval against the upstream site.
//!
//! One shared `reqwest::Client`, built once with fixed headers and timeout,
//! read-only afterwards and safe for concurrent reuse. No retries: a failed
//! fetch surfaces immediately and retry policy stays with the caller.

use crate::error::{MovietimeError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Fixed browser identification. The upstream site rejects requests that
/// do not present one; this is policy, not a tunable option.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/131.0.0.0 Safari/537.36";

const ACCEPT_JSON: &str = "application/json, text/plain, */*";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.9";

/// HTTP client for the upstream site's API endpoints and public pages.
pub struct PageFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl PageFetcher {
    /// Build a fetcher rooted at `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| MovietimeError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this fetcher is rooted at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a JSON API endpoint with query parameters.
    pub async fn get_api(&self, path: &str, params: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching API: {} params={:?}", url, params);

        let request = self
            .client
            .get(&url)
            .query(params)
            .header(ACCEPT, ACCEPT_JSON)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(REFERER, format!("{}/movietimes", self.base_url))
            .header(ORIGIN, self.base_url.clone());

        self.send(request, &url).await
    }

    /// Fetch an HTML page.
    pub async fn get_page(&self, path_and_query: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("Fetching page: {}", url);

        let request = self.client.get(&url).header(ACCEPT, ACCEPT_HTML);
        self.send(request, &url).await
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<String> {
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MovietimeError::UpstreamRejected {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| transport_error(url, &e))
    }
}

/// Classify a transport-level failure (connect, timeout, body read).
fn transport_error(url: &str, e: &reqwest::Error) -> MovietimeError {
    if e.is_timeout() {
        MovietimeError::UpstreamUnavailable(format!("request to {url} timed out"))
    } else {
        MovietimeError::UpstreamUnavailable(format!("request to {url} failed: {e}"))
    }
}
