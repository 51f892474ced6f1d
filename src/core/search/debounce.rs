// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Quiet-period debouncing for keystroke-driven recomputation
//!
//! Recomputing the filtered view on every character of a search term is
//! wasteful; [`Debouncer`] delays the recomputation until a fixed quiet
//! period has elapsed since the last keystroke. Each [`Debouncer::call`]
//! cancels and restarts the pending timer, and dropping the debouncer
//! (the presenting view was torn down) cancels it entirely, so no stale
//! recomputation fires after teardown.
//!
//! Built on `tokio::spawn`; callers must be inside a tokio runtime.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Restartable quiet-period timer.
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Schedule `f` to run after the quiet period, cancelling any previously
    /// scheduled call that has not fired yet.
    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            f();
        }));
    }

    /// Cancel the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a call is currently pending.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the pending call to fire (or observe its cancellation).
    ///
    /// Intended for tests and orderly shutdown; the common path never awaits
    /// the timer.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            // A JoinError here means the timer was aborted, which is fine
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
