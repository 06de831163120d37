//! Toast Notifier
//!
//! Routes form notifications into the toast store and schedules their dismissal.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use task_form::{NotifyKind, Notifier};

use crate::store::{store_dismiss_toast, store_push_toast, ToastStore};

/// How long each kind of toast stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub success_ms: u32,
    pub error_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            success_ms: 2000,
            error_ms: 4000,
        }
    }
}

impl ToastTimings {
    pub fn duration_ms(&self, kind: NotifyKind) -> u32 {
        match kind {
            NotifyKind::Success => self.success_ms,
            NotifyKind::Error => self.error_ms,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: ToastStore,
    timings: ToastTimings,
}

impl ToastNotifier {
    pub fn new(store: ToastStore, timings: ToastTimings) -> Self {
        Self { store, timings }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        let id = store_push_toast(&self.store, kind, message);
        log::debug!("[TOAST] #{} {:?}: {}", id, kind, message);

        let store = self.store;
        let duration = self.timings.duration_ms(kind);
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_dismiss_toast(&store, id);
        });
    }
}
