//! UI Components
//!
//! Leptos components for the task page.

mod page_header;
mod platform_selector;
mod response_panel;
mod task_form;
mod toaster;

pub use page_header::PageHeader;
pub use platform_selector::PlatformSelector;
pub use response_panel::ResponsePanel;
pub use task_form::TaskForm;
pub use toaster::Toaster;
