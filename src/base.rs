//! Shared starting point for API test cases.
//!
//! An [`ApiTestBase`] holds the loaded configuration and hands out full
//! endpoint URLs and clients configured from it.

use crate::client::{Headers, RestClient};
use crate::config::{get_config, ConfigError, Properties};
use crate::executor::{ExecutionConfig, JSON_CONTENT_TYPE};

pub use crate::client::status::*;

#[derive(Debug, Clone)]
pub struct ApiTestBase {
    properties: Properties,
    host: String,
    execution: ExecutionConfig,
}

impl ApiTestBase {
    /// Builds a test base from already-loaded properties.
    ///
    /// Fails when `HOST` is missing or `TIMEOUT` is not a positive number.
    pub fn new(properties: Properties) -> Result<Self, ConfigError> {
        let host = properties.host()?.to_string();
        let execution = ExecutionConfig::from_properties(&properties)?;
        log::info!("test server host: {}", host);

        Ok(Self {
            properties,
            host,
            execution,
        })
    }

    /// Builds a test base from the process-wide configuration.
    pub fn from_global() -> Result<Self, ConfigError> {
        Self::new(get_config()?.clone())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Joins the host and `path` with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        let url = format!("{}/{}", self.host, path.trim_start_matches('/'));
        log::info!("endpoint under test: {}", url);
        url
    }

    /// A client using the timeout from the configuration.
    pub fn client(&self) -> RestClient {
        RestClient::with_config(self.execution.clone())
    }

    /// Headers for requests that carry a JSON payload.
    pub fn json_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        headers
    }
}
