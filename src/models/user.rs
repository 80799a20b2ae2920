//! User fixture sent as the payload of create and update calls.

use serde::{Deserialize, Serialize};

/// A user record with a display name and a job title.
///
/// Serializes to `{"name": "...", "job": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub job: String,
}

impl User {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }

    /// Serializes the user into a compact JSON string for a request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
