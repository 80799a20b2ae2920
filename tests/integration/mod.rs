//! Integration tests module for REST Harness
//!
//! Common setup shared by the API test cases: logging, and a test base
//! pointing at a mock server.

pub mod delete_api_test;
pub mod error_handling_test;
pub mod get_api_test;
pub mod post_api_test;
pub mod put_api_test;

use mockito::ServerGuard;
use rest_harness::{ApiTestBase, Properties};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Test base whose `HOST` is the given mock server.
pub fn test_base(server: &ServerGuard) -> ApiTestBase {
    init_test_env();
    let content = format!("HOST = {}\nTIMEOUT = 10\n", server.url());
    let properties = Properties::parse(&content).expect("valid properties");
    ApiTestBase::new(properties).expect("valid test base")
}
