//! The REST client wrapper used by API test cases.
//!
//! Every call is a single synchronous exchange over a fresh connection. The
//! wrapper never retries and never turns an HTTP status into an error; tests
//! read the status with [`RestClient::status_code`] and assert on it.
//!
//! # Example
//!
//! ```no_run
//! use rest_harness::client::{status, RestClient};
//! use rest_harness::json_path::value_in_object;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestClient::new();
//! let response = client.get("https://reqres.in/api/users?page=2")?;
//! assert_eq!(client.status_code(&response), status::RESPONSE_STATUS_CODE_200);
//!
//! let json = client.response_json(&response)?;
//! assert_eq!(value_in_object(&json, "data[0]/first_name")?, "Eve");
//! # Ok(())
//! # }
//! ```

pub mod status;

use crate::executor::{execute_request, ExecutionConfig, RequestError};
use crate::models::{HttpMethod, HttpRequest, HttpResponse};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Header map accepted by the verbs that send headers.
pub type Headers = HashMap<String, String>;

/// Stateless HTTP client wrapper.
#[derive(Debug, Clone, Default)]
pub struct RestClient {
    config: ExecutionConfig,
}

impl RestClient {
    /// Creates a client with the default execution settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client with explicit execution settings.
    pub fn with_config(config: ExecutionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Sends a GET request with no extra headers.
    pub fn get(&self, url: &str) -> Result<HttpResponse, RequestError> {
        log::info!("sending GET request");
        self.send(HttpRequest::new(HttpMethod::GET, url))
    }

    /// Sends a GET request carrying every header in `headers`.
    pub fn get_with_headers(
        &self,
        url: &str,
        headers: &Headers,
    ) -> Result<HttpResponse, RequestError> {
        log::info!("sending GET request with {} header(s)", headers.len());
        self.send(HttpRequest::new(HttpMethod::GET, url).with_headers(headers))
    }

    /// Sends a POST request with a string payload.
    pub fn post(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<HttpResponse, RequestError> {
        log::info!("sending POST request");
        self.send(
            HttpRequest::new(HttpMethod::POST, url)
                .with_headers(headers)
                .with_body(body),
        )
    }

    /// Sends a PUT request with a string payload.
    pub fn put(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<HttpResponse, RequestError> {
        log::info!("sending PUT request");
        self.send(
            HttpRequest::new(HttpMethod::PUT, url)
                .with_headers(headers)
                .with_body(body),
        )
    }

    /// Sends a DELETE request with no headers or body.
    pub fn delete(&self, url: &str) -> Result<HttpResponse, RequestError> {
        log::info!("sending DELETE request");
        self.send(HttpRequest::new(HttpMethod::DELETE, url))
    }

    /// Returns the numeric status code of a response.
    pub fn status_code(&self, response: &HttpResponse) -> u16 {
        log::info!("response status code: {}", response.status_code);
        response.status_code
    }

    /// Decodes the body as UTF-8 and parses it as a JSON object.
    ///
    /// Fails with [`RequestError::InvalidBody`] for non UTF-8 bodies and with
    /// [`RequestError::JsonParse`] for anything that is not a single JSON
    /// object, including an empty body.
    pub fn response_json(
        &self,
        response: &HttpResponse,
    ) -> Result<Map<String, Value>, RequestError> {
        let text = response.body_as_string()?;
        log::debug!("response body: {}", text);

        match serde_json::from_str::<Value>(&text)? {
            Value::Object(map) => {
                log::info!("parsed response body as a JSON object");
                Ok(map)
            }
            other => Err(RequestError::JsonParse(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        execute_request(&request, &self.config)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
