//! Routes completion events into the prompt slot.

use std::sync::Arc;

use super::PromptState;
use crate::notify::Notifier;
use crate::streaming::{CompletionEvent, StreamObserver};

/// Observer that stores each completed prompt and plays the success cue.
pub struct CompletionDispatcher {
    state: PromptState,
    notifier: Arc<dyn Notifier>,
}

impl CompletionDispatcher {
    /// Create a dispatcher writing into `state`.
    pub fn new(state: PromptState, notifier: Arc<dyn Notifier>) -> Self {
        Self { state, notifier }
    }

    /// The slot this dispatcher writes into.
    pub fn state(&self) -> &PromptState {
        &self.state
    }
}

impl StreamObserver for CompletionDispatcher {
    fn on_complete(&self, event: CompletionEvent) {
        let version = self.state.replace(event.prompt);
        tracing::info!(version, "Updated current prompt from generation response");
        self.notifier.notify_success();
    }
}
