//! Task Request
//!
//! Wire body for the task endpoint and decoding of its response.

use serde::Serialize;

use crate::platform::Platform;

/// POST body for the task endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRequest {
    pub description: String,
    pub platform: Platform,
}

/// Turn a successful response body into display text.
///
/// A body that is a JSON string literal is unescaped; anything else is kept
/// byte-for-byte. No trimming either way.
pub fn decode_response_body(body: &str) -> String {
    match serde_json::from_str::<String>(body) {
        Ok(text) => text,
        Err(_) => body.to_string(),
    }
}
