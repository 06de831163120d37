//! TaskGPT Form Core
//!
//! Framework-agnostic form state and operations.
//! The UI layer supplies the HTTP client, clipboard and notifier through
//! the traits in `seams` and mirrors state snapshots via a render callback.

mod config;
mod controller;
mod error;
mod platform;
mod request;
mod seams;
mod state;

#[cfg(test)]
mod testing;

pub use config::FormConfig;
pub use controller::FormController;
pub use error::{CopyError, ParsePlatformError, TaskError};
pub use platform::Platform;
pub use request::{decode_response_body, TaskRequest};
pub use seams::{Clipboard, NotifyKind, Notifier, TaskClient};
pub use state::FormState;
