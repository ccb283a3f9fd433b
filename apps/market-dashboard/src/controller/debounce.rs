//! Cancellable one-shot timer.
//!
//! Each `schedule` call cancels the pending action before arming a new
//! one: the last scheduled action wins. This backs both the suggestion
//! debounce and the blur-hide delay.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// A restartable delay gate for debounced actions.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create an idle debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay`, cancelling any action scheduled
    /// earlier that has not fired yet.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(prev) = pending.take() {
            prev.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
