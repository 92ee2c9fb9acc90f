//! One-shot deferred callbacks on the tokio runtime.
//!
//! [`OneShotTask`] runs a callback once after a delay unless it is cancelled
//! first. Dropping the task cancels it. Scheduling requires an ambient
//! runtime; callers without one fall back to running the callback themselves.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A cancellable, delayed, run-at-most-once callback.
pub struct OneShotTask {
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl OneShotTask {
    /// Schedule `notify` to run after `delay` on the current runtime.
    ///
    /// Returns `None` when called outside a tokio runtime.
    pub fn try_schedule<F>(delay: Duration, notify: F) -> Option<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let (tx, rx) = oneshot::channel();
        let handle = runtime.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => notify(),
                _ = rx => {}
            }
        });
        Some(Self {
            cancel: Some(tx),
            handle,
        })
    }

    /// Stop the timer. Has no effect once the callback has run.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            // The task may already be gone; that is fine.
            let _ = tx.send(());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for OneShotTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
