//! Frontend Models
//!
//! View-side data structures.

use task_form::NotifyKind;

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: NotifyKind,
    pub message: String,
}

impl Toast {
    pub fn new(id: u32, kind: NotifyKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NotifyKind::Success => "toast toast-success",
            NotifyKind::Error => "toast toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotifyKind::Success => "✓",
            NotifyKind::Error => "✕",
        }
    }
}
