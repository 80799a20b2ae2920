//! HTTP request execution error types.
//!
//! This module defines error types that can occur while executing a request
//! or decoding its response, including network errors, timeouts, and bodies
//! that are not the JSON a test expected.

use std::fmt;

/// Errors that can occur during HTTP request execution or response decoding.
#[derive(Debug)]
pub enum RequestError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other network-level issues.
    NetworkError(String),

    /// Request timed out before completion.
    Timeout,

    /// Invalid URL provided in the request.
    InvalidUrl(String),

    /// TLS/SSL error occurred during HTTPS connection.
    TlsError(String),

    /// The server's response could not be read as HTTP, for example a body
    /// cut short of its declared length.
    ProtocolError(String),

    /// Errors that occur when constructing the HTTP client or request.
    BuildError(String),

    /// Only HTTP and HTTPS are supported.
    UnsupportedProtocol(String),

    /// Response body is not valid UTF-8 text.
    InvalidBody(String),

    /// Response body is not a well-formed JSON object.
    JsonParse(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RequestError::Timeout => write!(f, "Request timed out"),
            RequestError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            RequestError::TlsError(msg) => write!(f, "TLS/SSL error: {}", msg),
            RequestError::ProtocolError(msg) => write!(f, "HTTP protocol error: {}", msg),
            RequestError::BuildError(msg) => write!(f, "Request build error: {}", msg),
            RequestError::UnsupportedProtocol(protocol) => {
                write!(f, "Unsupported protocol: {}", protocol)
            }
            RequestError::InvalidBody(msg) => write!(f, "Invalid response body: {}", msg),
            RequestError::JsonParse(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Convert reqwest errors to RequestError.
///
/// TLS failures are recognised from the error's sources only. The top-level
/// message embeds the request URL and says nothing about the cause.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_builder() {
            RequestError::BuildError(message)
        } else if has_tls_source(&err) {
            RequestError::TlsError(message)
        } else if err.is_connect() {
            RequestError::NetworkError(format!("Connection failed: {}", message))
        } else if err.is_body() || err.is_decode() {
            RequestError::ProtocolError(message)
        } else {
            RequestError::NetworkError(message)
        }
    }
}

fn has_tls_source(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if text.contains("certificate") || text.contains("TLS") || text.contains("SSL") {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Convert URL parsing errors to RequestError.
impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::JsonParse(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for RequestError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RequestError::InvalidBody(err.to_string())
    }
}
