//! Form State
//!
//! The four transient fields behind the form and the pure transitions on them.

use crate::error::TaskError;
use crate::platform::Platform;
use crate::request::TaskRequest;

/// Snapshot of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Stored exactly as typed
    pub description: String,
    pub selected_platform: Platform,
    /// Last successful response, verbatim; empty until the first success
    pub response: String,
    pub is_loading: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the trimmed description in UTF-16 code units, as the browser counts it
    pub fn trimmed_len(&self) -> usize {
        self.description.trim().encode_utf16().count()
    }

    /// Whether a submit would start a request
    pub fn can_submit(&self, min_description_len: usize) -> bool {
        !self.is_loading && self.trimmed_len() > min_description_len
    }

    pub fn has_response(&self) -> bool {
        !self.response.is_empty()
    }

    /// Enter the loading state and build the request body.
    ///
    /// Returns `None` without touching state when the gate is closed.
    pub fn begin_submit(&mut self, min_description_len: usize) -> Option<TaskRequest> {
        if !self.can_submit(min_description_len) {
            return None;
        }
        self.is_loading = true;
        Some(TaskRequest {
            description: self.description.clone(),
            platform: self.selected_platform,
        })
    }

    /// Leave the loading state; only a success replaces `response`
    pub fn finish_submit(&mut self, result: &Result<String, TaskError>) {
        self.is_loading = false;
        if let Ok(text) = result {
            self.response = text.clone();
        }
    }
}
