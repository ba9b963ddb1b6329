//! HTTP client abstraction.
//!
//! Providers depend on this trait instead of a concrete HTTP stack so
//! tests can substitute canned responses. [`ReqwestClient`] is the real
//! implementation, a blocking reqwest client with rustls.

use std::time::Duration;

use super::types::ProviderError;

/// Default request timeout for tile downloads.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP GET interface used by tile providers.
pub trait HttpClient: Send + Sync {
    /// Fetches `url`, returning the response body on a 2xx status.
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Blocking reqwest-backed [`HttpClient`].
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a client with the default 30 second timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Http(format!("failed to build client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| ProviderError::Http(format!("failed to read body: {}", e)))
    }
}
