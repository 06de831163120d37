//! Test doubles for the collaborator traits.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::{CopyError, TaskError};
use crate::request::TaskRequest;
use crate::seams::{Clipboard, NotifyKind, Notifier, TaskClient};

/// Replays queued results and records every request it receives
#[derive(Clone, Default)]
pub struct ScriptedClient {
    responses: Rc<RefCell<VecDeque<Result<String, TaskError>>>>,
    requests: Rc<RefCell<Vec<TaskRequest>>>,
    yield_before_reply: Rc<Cell<bool>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, result: Result<String, TaskError>) {
        self.responses.borrow_mut().push_back(result);
    }

    /// Suspend once per request so other futures can run while it is pending
    pub fn yield_before_reply(&self) {
        self.yield_before_reply.set(true);
    }

    pub fn requests(&self) -> Vec<TaskRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl TaskClient for ScriptedClient {
    async fn generate(&self, request: &TaskRequest) -> Result<String, TaskError> {
        self.requests.borrow_mut().push(request.clone());
        if self.yield_before_reply.get() {
            tokio::task::yield_now().await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TaskError::Network("no scripted response".to_string())))
    }
}

#[derive(Clone, Default)]
pub struct FakeClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    failure: Rc<RefCell<Option<CopyError>>>,
}

impl FakeClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, err: CopyError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        self.writes.borrow_mut().push(text.to_string());
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<(NotifyKind, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(NotifyKind, String)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        self.messages.borrow_mut().push((kind, message.to_string()));
    }
}
