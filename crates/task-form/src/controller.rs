//! Form Controller
//!
//! Runs the form operations against the collaborator traits and reports every
//! state change to a render callback.

use std::cell::RefCell;

use crate::config::FormConfig;
use crate::platform::Platform;
use crate::seams::{Clipboard, NotifyKind, Notifier, TaskClient};
use crate::state::FormState;

type RenderFn = Box<dyn Fn(&FormState)>;

/// Owns the form state and its collaborators
///
/// State is never borrowed across an `.await`, so the render callback and
/// other UI handlers may call back into the controller while a request is
/// in flight.
pub struct FormController<C, B, N> {
    state: RefCell<FormState>,
    config: FormConfig,
    client: C,
    clipboard: B,
    notifier: N,
    on_change: Option<RenderFn>,
}

impl<C, B, N> FormController<C, B, N>
where
    C: TaskClient,
    B: Clipboard,
    N: Notifier,
{
    pub fn new(config: FormConfig, client: C, clipboard: B, notifier: N) -> Self {
        Self {
            state: RefCell::new(FormState::new()),
            config,
            client,
            clipboard,
            notifier,
            on_change: None,
        }
    }

    /// Register the callback invoked with a snapshot after each mutation
    pub fn with_on_change(mut self, on_change: impl Fn(&FormState) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current state snapshot
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.state.borrow().can_submit(self.config.min_description_len)
    }

    pub fn update_description(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|state| state.description = text);
    }

    pub fn select_platform(&self, platform: Platform) {
        self.mutate(|state| state.selected_platform = platform);
    }

    /// Send the description to the task endpoint.
    ///
    /// Returns `false` without any request when loading or when the trimmed
    /// description is too short.
    pub async fn submit(&self) -> bool {
        let min_len = self.config.min_description_len;
        let begun = {
            let mut state = self.state.borrow_mut();
            state.begin_submit(min_len).map(|request| (request, state.clone()))
        };
        let Some((request, snapshot)) = begun else {
            log::debug!("[FORM] Submit ignored: gate closed");
            return false;
        };
        self.render(&snapshot);

        log::info!("[FORM] Submitting task for platform={}", request.platform);
        let result = self.client.generate(&request).await;
        self.mutate(|state| state.finish_submit(&result));

        match result {
            Ok(text) => log::info!("[FORM] Task generated ({} chars)", text.chars().count()),
            Err(e) => {
                log::warn!("[FORM] Task request failed: {}", e);
                self.notifier.notify(NotifyKind::Error, &e.to_string());
            }
        }
        true
    }

    /// Copy the current response to the clipboard.
    ///
    /// Returns `false` when there is nothing to copy.
    pub async fn copy_response(&self) -> bool {
        let response = self.state.borrow().response.clone();
        if response.is_empty() {
            return false;
        }

        match self.clipboard.write_text(&response).await {
            Ok(()) => self.notifier.notify(NotifyKind::Success, &self.config.copy_success_message),
            Err(e) => {
                log::warn!("[FORM] Copy failed: {}", e);
                self.notifier.notify(NotifyKind::Error, &self.config.copy_failure_message);
            }
        }
        true
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let (out, snapshot) = {
            let mut state = self.state.borrow_mut();
            let out = f(&mut state);
            (out, state.clone())
        };
        self.render(&snapshot);
        out
    }

    fn render(&self, snapshot: &FormState) {
        if let Some(on_change) = &self.on_change {
            on_change(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::testing::{FakeClipboard, RecordingNotifier, ScriptedClient};
    use crate::{CopyError, TaskError, TaskRequest};

    type TestController = FormController<ScriptedClient, FakeClipboard, RecordingNotifier>;

    struct Harness {
        controller: TestController,
        client: ScriptedClient,
        clipboard: FakeClipboard,
        notifier: RecordingNotifier,
        renders: Rc<RefCell<Vec<FormState>>>,
    }

    fn harness() -> Harness {
        let client = ScriptedClient::new();
        let clipboard = FakeClipboard::new();
        let notifier = RecordingNotifier::new();
        let renders = Rc::new(RefCell::new(Vec::new()));
        let sink = renders.clone();
        let controller = FormController::new(
            FormConfig::default(),
            client.clone(),
            clipboard.clone(),
            notifier.clone(),
        )
        .with_on_change(move |state| sink.borrow_mut().push(state.clone()));
        Harness { controller, client, clipboard, notifier, renders }
    }

    #[tokio::test]
    async fn test_short_description_never_hits_network() {
        let h = harness();
        h.controller.update_description("short");
        for platform in Platform::ALL {
            h.controller.select_platform(platform);
            assert!(!h.controller.can_submit());
            assert!(!h.controller.submit().await);
        }
        assert!(h.client.requests().is_empty());
        assert!(!h.controller.state().is_loading);
    }

    #[tokio::test]
    async fn test_submit_posts_description_and_platform() {
        let h = harness();
        h.client.push_response(Ok("done".to_string()));
        h.controller.update_description("a".repeat(16));
        h.controller.select_platform(Platform::Jira);
        assert!(h.controller.can_submit());

        assert!(h.controller.submit().await);

        let requests = h.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            TaskRequest { description: "a".repeat(16), platform: Platform::Jira }
        );
        assert_eq!(
            serde_json::to_string(&requests[0]).unwrap(),
            r#"{"description":"aaaaaaaaaaaaaaaa","platform":"jira"}"#
        );
    }

    #[tokio::test]
    async fn test_success_stores_body_verbatim() {
        let h = harness();
        let body = "Fix login bug\n\nSteps: ...";
        h.client.push_response(Ok(body.to_string()));
        h.controller.update_description("login button does nothing on safari");

        h.controller.submit().await;

        let state = h.controller.state();
        assert_eq!(state.response, body);
        assert!(!state.is_loading);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_loading_rendered_while_in_flight() {
        let h = harness();
        h.client.push_response(Ok("ok".to_string()));
        h.controller.update_description("login button does nothing on safari");
        h.renders.borrow_mut().clear();

        h.controller.submit().await;

        let renders = h.renders.borrow();
        assert_eq!(renders.len(), 2);
        assert!(renders[0].is_loading);
        assert!(!renders[0].can_submit(15));
        assert!(!renders[1].is_loading);
        assert_eq!(renders[1].response, "ok");
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        let h = harness();
        h.client.yield_before_reply();
        h.client.push_response(Ok("first".to_string()));
        h.client.push_response(Ok("second".to_string()));
        h.controller.update_description("login button does nothing on safari");

        // The first submit is suspended inside the client when the second runs
        let (first, second) = tokio::join!(h.controller.submit(), h.controller.submit());

        assert!(first);
        assert!(!second);
        assert_eq!(h.client.requests().len(), 1);
        let state = h.controller.state();
        assert_eq!(state.response, "first");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_failure_keeps_response_and_notifies() {
        let h = harness();
        h.client.push_response(Ok("first answer".to_string()));
        h.client.push_response(Err(TaskError::Status(500)));
        h.controller.update_description("login button does nothing on safari");

        h.controller.submit().await;
        h.controller.submit().await;

        let state = h.controller.state();
        assert_eq!(state.response, "first answer");
        assert!(!state.is_loading);
        assert_eq!(
            h.notifier.messages(),
            vec![(NotifyKind::Error, "Request failed with status code 500".to_string())]
        );
        // The form stays usable after a failure
        assert!(h.controller.can_submit());
    }

    #[tokio::test]
    async fn test_copy_writes_exact_response() {
        let h = harness();
        let body = "Fix login bug\n\nSteps: ...";
        h.client.push_response(Ok(body.to_string()));
        h.controller.update_description("login button does nothing on safari");
        h.controller.submit().await;

        assert!(h.controller.copy_response().await);

        assert_eq!(h.clipboard.writes(), vec![body.to_string()]);
        assert_eq!(
            h.notifier.messages(),
            vec![(NotifyKind::Success, "Copied to clipboard! 🚀".to_string())]
        );
        assert_eq!(h.controller.state().response, body);
    }

    #[tokio::test]
    async fn test_copy_rejection_notifies_failure() {
        let h = harness();
        h.client.push_response(Ok("answer".to_string()));
        h.controller.update_description("login button does nothing on safari");
        h.controller.submit().await;
        h.clipboard.fail_with(CopyError::Rejected("NotAllowedError".to_string()));

        assert!(h.controller.copy_response().await);

        let state = h.controller.state();
        assert_eq!(state.response, "answer");
        assert!(!state.is_loading);
        assert_eq!(
            h.notifier.messages(),
            vec![(NotifyKind::Error, "Could not copy to clipboard 🥲".to_string())]
        );
    }

    #[tokio::test]
    async fn test_copy_empty_response_is_noop() {
        let h = harness();
        assert!(!h.controller.copy_response().await);
        assert!(h.clipboard.writes().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_platform_selection_is_exclusive() {
        let h = harness();
        for platform in Platform::ALL {
            h.controller.select_platform(platform);
            let state = h.controller.state();
            let selected: Vec<_> = Platform::ALL
                .iter()
                .filter(|p| **p == state.selected_platform)
                .collect();
            assert_eq!(selected, vec![&platform]);
        }
    }

    #[test]
    fn test_description_stored_untrimmed() {
        let h = harness();
        h.controller.update_description("  spaced out  ");
        assert_eq!(h.controller.state().description, "  spaced out  ");
        assert_eq!(h.renders.borrow().len(), 1);
    }
}
