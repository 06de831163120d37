//! Toast Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use task_form::NotifyKind;

use crate::models::Toast;

/// Toasts on screen, oldest first
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    /// Last id handed out; ids are never reused
    pub next_id: u32,
}

/// Type alias for the store
pub type ToastStore = Store<ToastState>;

/// Get the toast store from context
pub fn use_toast_store() -> ToastStore {
    expect_context::<ToastStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast and return its id
pub fn store_push_toast(store: &ToastStore, kind: NotifyKind, message: &str) -> u32 {
    let next_id = store.next_id();
    next_id.update(|n| *n += 1);
    let id = next_id.get_untracked();
    store.toasts().write().push(Toast::new(id, kind, message));
    id
}

/// Remove a toast by id; unknown ids are ignored
pub fn store_dismiss_toast(store: &ToastStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
