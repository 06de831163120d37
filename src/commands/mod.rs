//! Browser Adapters
//!
//! Implementations of the form's collaborator traits on top of browser APIs.

mod clipboard;
mod task;

pub use clipboard::BrowserClipboard;
pub use task::HttpTaskClient;
