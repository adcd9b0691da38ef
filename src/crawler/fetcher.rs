//! HTTP fetcher implementation
//!
//! Builds the shared HTTP client and downloads page bodies. Every failure
//! cause (DNS, connect, timeout, non-2xx status, body read) collapses into
//! one error signal; workers treat a failed fetch as a dead end with no
//! retry and no backoff. Redirects are followed by the client.

use crate::config::CrawlerConfig;
use crate::WikitrailError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used by all workers of one search
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Downloads the body of a page
///
/// The core imposes no policy beyond the client's request timeout; any
/// error is reported with the URL attached so callers can log it.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, WikitrailError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| WikitrailError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WikitrailError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| WikitrailError::Http {
        url: url.to_string(),
        source,
    })
}
