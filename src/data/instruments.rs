//! Instrument dump API client
//!
//! Fetches the mutual fund instrument catalog from the broker API as raw
//! delimited text. One authenticated GET per call; no retries and no state
//! beyond the HTTP client. Staleness and refresh policy live in the cache.

use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on one catalog fetch
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API version header value expected by the broker
const API_VERSION: &str = "3";

/// Errors that can occur when fetching the instrument dump
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection failure, timeout, invalid response)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {0}")]
    Status(StatusCode),
}

/// Source of raw instrument payloads
///
/// The cache is generic over this seam so tests can drive it with a scripted
/// fetcher instead of the network.
pub trait FetchInstruments {
    /// Performs one fetch of the raw instrument payload
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Client for fetching the instrument dump from the broker API
#[derive(Debug, Clone)]
pub struct InstrumentsClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Full URL of the instrument dump endpoint
    base_url: String,
    /// API key for the authorization header
    api_key: String,
    /// Access token for the authorization header
    access_token: String,
}

impl InstrumentsClient {
    /// Creates a new InstrumentsClient for the given endpoint and credentials
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            access_token: access_token.into(),
        }
    }

    /// Returns the authorization header value for the configured credentials
    fn auth_header(&self) -> String {
        format!("token {}:{}", self.api_key, self.access_token)
    }

    /// Fetches the raw instrument payload
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The raw payload bytes as served upstream
    /// * `Err(FetchError)` - On transport failure or a non-2xx status
    pub async fn fetch_instruments(&self) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .header("X-Kite-Version", API_VERSION)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl FetchInstruments for InstrumentsClient {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        self.fetch_instruments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_format() {
        let client = InstrumentsClient::new("https://api.example.com/mf/instruments", "key123", "tok456");
        assert_eq!(client.auth_header(), "token key123:tok456");
    }

    #[test]
    fn test_client_keeps_configured_url() {
        let client = InstrumentsClient::new("https://api.example.com/mf/instruments", "k", "t");
        assert_eq!(client.base_url, "https://api.example.com/mf/instruments");
    }

    #[test]
    fn test_status_error_message_names_code() {
        let err = FetchError::Status(StatusCode::FORBIDDEN);
        assert!(err.to_string().contains("403"));
    }
}
