//! Page fetching over HTTP and local file reads.
//!
//! The extractor builds one [`Client`] per batch with [`build_client`] and
//! reuses it for every record through [`fetch_with_client`]. [`fetch_url`]
//! is the one-shot convenience wrapper.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{MetricaError, Result};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Metrica/1.0)".to_string() }
    }
}

/// Builds a reusable HTTP client honoring the configured timeout.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    if config.timeout == 0 {
        return Err(MetricaError::ConfigError("timeout must be at least one second".to_string()));
    }

    Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(MetricaError::HttpError)
}

/// Validates that `url` is absolute with an http or https scheme.
pub fn parse_http_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| MetricaError::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(MetricaError::InvalidUrl(format!(
            "{}: unsupported scheme {:?} (expected http or https)",
            url, other
        ))),
    }
}

/// Fetches HTML content from a URL with an existing client.
///
/// Non-success status codes are logged but the body is still returned,
/// so error pages are extracted like any other page.
pub async fn fetch_with_client(client: &Client, url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_http_url(url)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                MetricaError::Timeout { timeout: config.timeout }
            } else {
                MetricaError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "Non-success HTTP status");
    }

    let content = response.text().await?;

    Ok(content)
}

/// Fetches HTML content from a URL.
///
/// Builds a fresh client for the single request; batch callers should use
/// [`build_client`] and [`fetch_with_client`] instead.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let client = build_client(config)?;
    fetch_with_client(&client, url, config).await
}

/// Reads a local file as bytes, mapping a missing path to [`MetricaError::FileNotFound`].
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        Err(MetricaError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read(path).map_err(MetricaError::from)
    }
}
