//! Scripted sandbox host used by the bridge tests.
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures_util::future::{self, FutureExt, LocalBoxFuture};
use serde_json::Value;

use super::gateway::{HostError, SandboxHost};

#[derive(Debug, Clone, Default)]
pub struct MockHost {
    markup: Rc<RefCell<Vec<String>>>,
    scripts: Rc<RefCell<Vec<String>>>,
    replies: Rc<RefCell<VecDeque<Result<Value, HostError>>>>,
}

impl MockHost {
    /// Queue the reply for the next evaluated script. Scripts without a
    /// queued reply behave like commands that return nothing.
    pub fn push_reply(&self, reply: Result<Value, HostError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }

    pub fn loaded_markup(&self) -> Vec<String> {
        self.markup.borrow().clone()
    }
}

impl SandboxHost for MockHost {
    fn load_markup(&self, markup: &str) {
        self.markup.borrow_mut().push(markup.to_string());
    }

    fn evaluate(&self, script: String) -> LocalBoxFuture<'static, Result<Value, HostError>> {
        self.scripts.borrow_mut().push(script);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(HostError::UnsupportedResultType));
        future::ready(reply).boxed_local()
    }
}
