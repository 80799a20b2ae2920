//! HTTP request executor.
//!
//! Turns an [`HttpRequest`] into a real HTTP exchange using the blocking
//! reqwest client. Every call builds its own client, so no connection is ever
//! reused between two requests, and the whole body is read before returning.

pub mod config;
pub mod error;

pub use config::ExecutionConfig;
pub use error::RequestError;

use crate::models::request::{HttpMethod, HttpRequest};
use crate::models::response::HttpResponse;
use std::collections::HashMap;
use std::time::Instant;

/// Content type sent with payloads that do not declare one.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Executes an HTTP request and returns the response.
///
/// A non-2xx status is not an error; it is reported in
/// [`HttpResponse::status_code`]. Errors are returned only when the exchange
/// itself fails.
///
/// # Examples
///
/// ```no_run
/// use rest_harness::executor::{execute_request, ExecutionConfig};
/// use rest_harness::models::{HttpMethod, HttpRequest};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let request = HttpRequest::new(HttpMethod::GET, "https://reqres.in/api/users?page=2");
/// let response = execute_request(&request, &ExecutionConfig::default())?;
///
/// println!("Status: {}", response.status_code);
/// # Ok(())
/// # }
/// ```
pub fn execute_request(
    request: &HttpRequest,
    config: &ExecutionConfig,
) -> Result<HttpResponse, RequestError> {
    validate_url(&request.url)?;

    let method = match request.method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout_duration())
        .pool_max_idle_per_host(0)
        .build()
        .map_err(|e| RequestError::BuildError(e.to_string()))?;

    let mut req_builder = client.request(method, &request.url);

    for (name, value) in &request.headers {
        req_builder = req_builder.header(name.as_str(), value.as_str());
    }

    if let Some(body) = &request.body {
        if request.has_body() && request.content_type().is_none() {
            req_builder = req_builder.header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        }
        req_builder = req_builder.body(body.clone());
    }

    log::info!(
        "[{}] sending {} request to {}",
        request.id,
        request.method,
        request.url
    );
    let start_time = Instant::now();

    let response = req_builder.send()?;

    let status_code = response.status().as_u16();
    let status_text = response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_string();

    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        match value.to_str() {
            Ok(value_str) => {
                headers.insert(name.as_str().to_string(), value_str.to_string());
            }
            Err(_) => log::debug!(
                "[{}] skipping non-text response header {}",
                request.id,
                name
            ),
        }
    }

    // A truncated or undecodable body surfaces as ProtocolError.
    let body = response.bytes()?.to_vec();
    let duration = start_time.elapsed();

    log::info!(
        "[{}] received {} {} ({} bytes in {} ms)",
        request.id,
        status_code,
        status_text,
        body.len(),
        duration.as_millis()
    );

    Ok(HttpResponse {
        status_code,
        status_text,
        headers,
        body,
        duration,
    })
}

/// Validates that the URL is well-formed and uses a supported protocol.
fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(format!(
            "Only HTTP and HTTPS are supported, got: {}",
            scheme
        )));
    }

    Ok(())
}
