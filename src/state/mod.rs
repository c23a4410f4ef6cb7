//! The process-wide "current prompt" slot and the observer that writes to it.

mod dispatch;

pub use dispatch::CompletionDispatcher;

use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::empty_template;

struct Slot {
    prompt: Value,
    version: u64,
}

/// Shared handle to the current prompt.
///
/// Clones point at the same slot. Concurrent writers are not coordinated:
/// whichever `replace` runs last wins.
#[derive(Clone)]
pub struct PromptState {
    slot: Arc<RwLock<Slot>>,
}

impl PromptState {
    /// Create a slot holding the empty template.
    pub fn new() -> Self {
        Self::with_prompt(empty_template())
    }

    /// Create a slot holding `prompt`.
    pub fn with_prompt(prompt: Value) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot { prompt, version: 0 })),
        }
    }

    /// Snapshot of the current prompt.
    pub fn current(&self) -> Value {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .prompt
            .clone()
    }

    /// Number of replacements since creation.
    pub fn version(&self) -> u64 {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .version
    }

    /// Replace the current prompt, returning the new version.
    pub fn replace(&self, prompt: Value) -> u64 {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.prompt = prompt;
        slot.version += 1;
        slot.version
    }

    /// Reset to the empty template.
    pub fn clear(&self) -> u64 {
        self.replace(empty_template())
    }
}

impl Default for PromptState {
    fn default() -> Self {
        Self::new()
    }
}
