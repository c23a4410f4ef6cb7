//! Audible cue played when a generation finishes.
//!
//! Notification is fire-and-forget: implementations log failures and never
//! report them to the caller.

mod tone;

pub use tone::{PcmNotifier, ToneSpec};

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Receives the success signal.
pub trait Notifier: Send + Sync {
    /// Signal that a generated prompt was captured.
    fn notify_success(&self);
}

/// Rings the terminal bell.
pub struct BellNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl BellNotifier<std::io::Stderr> {
    /// Bell on standard error.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> BellNotifier<W> {
    /// Bell on an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for BellNotifier<W> {
    fn notify_success(&self) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to ring bell");
        }
    }
}

/// Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify_success(&self) {}
}

/// Forwards to another notifier only while sound is enabled.
pub struct GatedNotifier {
    inner: Arc<dyn Notifier>,
    enabled: bool,
}

impl GatedNotifier {
    /// Wrap `inner`, forwarding only if `enabled`.
    pub fn new(inner: Arc<dyn Notifier>, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

impl Notifier for GatedNotifier {
    fn notify_success(&self) {
        if self.enabled {
            self.inner.notify_success();
        }
    }
}
