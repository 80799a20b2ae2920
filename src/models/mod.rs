//! Data models for HTTP requests, responses and request payload fixtures.

pub mod request;
pub mod response;
pub mod user;

pub use request::{HttpMethod, HttpRequest};
pub use response::HttpResponse;
pub use user::User;
