//! Form Errors
//!
//! The two failures a user can see: the task request failed, or the copy failed.

use thiserror::Error;

/// Task endpoint failure. The `Display` text is what the error toast shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("Cannot resolve task endpoint: {0}")]
    Endpoint(String),
}

/// Clipboard write failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct ParsePlatformError(pub String);
