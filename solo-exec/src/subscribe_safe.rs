// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio_util::sync::CancellationToken;

use solo_core::{Observer, Subject};

use crate::subscribe::SubscribeExt;
use crate::subscription::Subscription;

/// Safe subscription entry point for push sources.
///
/// "Safe" means subscription-time failures are routed through the
/// observer's `on_error` entry point instead of being raised to the caller,
/// so the observer contract (at most one terminal notification, nothing
/// raised across the boundary) holds even when the subscription itself
/// cannot be established.
pub trait SubscribeSafeExt<T> {
    /// Subscribes `observer` to this source.
    ///
    /// On success this behaves exactly like
    /// [`subscribe`](crate::SubscribeExt::subscribe). If the source refuses
    /// the subscription (for example, a closed [`Subject`]), the refusal is
    /// delivered through `observer.on_error` and the returned handle is
    /// already disposed.
    fn subscribe_safe<O>(
        &self,
        observer: O,
        cancellation_token: Option<CancellationToken>,
    ) -> Subscription
    where
        O: Observer<T> + Send + 'static;
}

impl<T: Clone + Send + 'static> SubscribeSafeExt<T> for Subject<T> {
    fn subscribe_safe<O>(
        &self,
        mut observer: O,
        cancellation_token: Option<CancellationToken>,
    ) -> Subscription
    where
        O: Observer<T> + Send + 'static,
    {
        match self.subscribe() {
            Ok(stream) => stream.subscribe(observer, cancellation_token),
            Err(error) => {
                observer.on_error(error.into());
                Subscription::disposed()
            }
        }
    }
}
