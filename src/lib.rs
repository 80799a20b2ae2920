//! REST Harness
//!
//! A small synchronous REST client and the scaffolding API smoke tests are
//! written with: load a properties file naming the host, send a request,
//! assert on the status code, pull a field out of the JSON body and assert on
//! its value.
//!
//! # Architecture
//!
//! - **config**: properties-file loading and the process-wide configuration
//! - **models**: request/response data structures and payload fixtures
//! - **executor**: executes one request over a fresh blocking connection
//! - **client**: the `get`/`post`/`put`/`delete` wrapper and its helpers
//! - **json_path**: `data[0]/first_name` style lookups into JSON bodies
//! - **base**: shared test base built from the configuration
//!
//! # Usage
//!
//! ```no_run
//! use rest_harness::base::{ApiTestBase, RESPONSE_STATUS_CODE_201};
//! use rest_harness::json_path::value_in_object;
//! use rest_harness::models::User;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let base = ApiTestBase::from_global()?;
//! let client = base.client();
//!
//! let user = User::new("Anthony", "tester");
//! let response = client.post(&base.url("/api/users"), &user.to_json()?, &base.json_headers())?;
//! assert_eq!(client.status_code(&response), RESPONSE_STATUS_CODE_201);
//!
//! let json = client.response_json(&response)?;
//! assert_eq!(value_in_object(&json, "name")?, "Anthony");
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod client;
pub mod config;
pub mod executor;
pub mod json_path;
pub mod models;

pub use base::ApiTestBase;
pub use client::RestClient;
pub use config::{ConfigError, Properties};
pub use executor::RequestError;
pub use models::{HttpResponse, User};
