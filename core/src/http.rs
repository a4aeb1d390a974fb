//! HTTP request and response values, plus the `Transport` seam that moves
//! them over the wire.
//!
//! # Design
//! `HeroClient` builds an `HttpRequest` and parses an `HttpResponse` without
//! touching the network itself. A `Transport` performs the round-trip in
//! between, so the client's mapping from responses to errors stays
//! deterministic and testable with canned responses.

use std::time::Duration;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// `status` is whatever the peer sent; `HeroClient` decides whether it is a
/// usable HTTP status at all. `body` is raw bytes: text decoding belongs to
/// the client, not the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Why a `Transport` could not produce an `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// DNS, connect, TLS, timeout, or I/O failure.
    Connect(String),
    /// The peer did not speak valid HTTP.
    Malformed(String),
    Other(String),
}

/// Executes one `HttpRequest`. Implementations must not retry.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// Blocking transport backed by a `ureq` agent.
///
/// Status-code-as-error is disabled so 4xx/5xx come back as data and the
/// client owns status interpretation.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// `None` leaves the agent's defaults in place.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut call = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (name, value) in &request.headers {
            call = call.header(name.as_str(), value.as_str());
        }
        let mut response = call.call().map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(classify)?;

        Ok(HttpResponse { status, body })
    }
}

fn classify(err: ureq::Error) -> TransportFailure {
    match err {
        ureq::Error::Io(_)
        | ureq::Error::Timeout(_)
        | ureq::Error::HostNotFound
        | ureq::Error::ConnectionFailed
        | ureq::Error::Tls(_)
        | ureq::Error::Rustls(_) => TransportFailure::Connect(err.to_string()),
        ureq::Error::Protocol(_) => TransportFailure::Malformed(err.to_string()),
        other => TransportFailure::Other(other.to_string()),
    }
}
