//! Collaborator Traits
//!
//! Abstract interfaces for the task endpoint, clipboard and toasts.
//! Browser futures are not `Send`, so the async traits are `?Send`.

use async_trait::async_trait;

use crate::error::{CopyError, TaskError};
use crate::request::TaskRequest;

/// Sends a task request and returns the display text
#[async_trait(?Send)]
pub trait TaskClient {
    async fn generate(&self, request: &TaskRequest) -> Result<String, TaskError>;
}

/// System clipboard
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// Transient user-facing messages
pub trait Notifier {
    fn notify(&self, kind: NotifyKind, message: &str);
}
