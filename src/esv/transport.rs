/// HTTP transport: one blocking GET, whole body collected.
use std::time::Duration;

use tracing::debug;

use super::errors::EsvError;
use super::request::PassageRequest;

/// What came back from the server, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase (e.g. "Unauthorized"), empty when unknown.
    pub reason: String,
    pub body: String,
}

/// Sends a built request and returns the raw response.
pub trait Transport {
    /// # Errors
    ///
    /// Returns `EsvError::Request` when no response could be obtained.
    fn send(&self, request: &PassageRequest) -> Result<RawResponse, EsvError>;
}

/// `reqwest` blocking client with a finite timeout.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns `EsvError::Client` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, EsvError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EsvError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &PassageRequest) -> Result<RawResponse, EsvError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().map_err(request_failed)?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        let body = response.text().map_err(request_failed)?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}

fn request_failed(err: reqwest::Error) -> EsvError {
    let reason = if err.is_timeout() {
        format!("timed out ({err})")
    } else {
        err.to_string()
    };
    EsvError::Request { reason }
}
