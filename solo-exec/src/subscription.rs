// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Disposable handle to an active subscription.
///
/// Dropping the handle does NOT dispose the subscription; the driver task
/// keeps delivering until the source terminates. Call [`dispose`] to stop
/// delivery early.
///
/// [`dispose`]: Subscription::dispose
pub struct Subscription {
    token: CancellationToken,
    disposed: Arc<AtomicBool>,
}

impl Subscription {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self {
            token,
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a handle that is already disposed.
    ///
    /// Used when a subscription cannot be established at all, so the caller
    /// still receives a uniform handle.
    pub(crate) fn disposed() -> Self {
        let token = CancellationToken::new();
        token.cancel();
        Self {
            token,
            disposed: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Stops future observer invocations and releases the driver task.
    ///
    /// Disposal is silent: if the subscription had not yet terminated, the
    /// observer receives no further notification of any kind. Calling this
    /// more than once has no additional effect; the one-shot guard here does
    /// not rely on the underlying token tolerating double cancellation.
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            self.token.cancel();
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called or the
    /// subscription reached a terminal signal.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst) || self.token.is_cancelled()
    }
}
