//! HTTP transport seam for the ranking pipeline.
//!
//! The pipeline talks to its data endpoint through the [`Transport`] trait so
//! tests can substitute an in-memory fake for the real network.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a read request: status code plus the parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Value,
}

/// Outcome of a write request: status code plus the raw response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    pub status: u16,
    pub body: String,
}

/// Errors crossing the transport boundary.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("invalid JSON body: {0}")]
    Json(#[source] reqwest::Error),
}

/// Blocking request/response client for a carpool data endpoint.
pub trait Transport {
    fn get(&self, url: &str) -> Result<FetchResponse, TransportError>;
    fn post(&self, url: &str, body: &str) -> Result<PostResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<FetchResponse, TransportError> {
        (**self).get(url)
    }

    fn post(&self, url: &str, body: &str) -> Result<PostResponse, TransportError> {
        (**self).post(url, body)
    }
}

/// Real transport over a blocking `reqwest` client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let response = self.client.get(url).send().map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.json().map_err(TransportError::Json)?;
        Ok(FetchResponse { status, body })
    }

    fn post(&self, url: &str, body: &str) -> Result<PostResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(TransportError::Http)?;
        Ok(PostResponse { status, body })
    }
}
