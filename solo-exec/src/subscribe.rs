// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

use solo_core::{Observer, Signal};

use crate::subscription::Subscription;

/// Extension trait delivering a signal stream to an observer.
pub trait SubscribeExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Subscribes `observer` to this stream on a spawned driver task.
    ///
    /// # Behavior
    ///
    /// - Signals are delivered one at a time, in production order
    /// - `on_next` is called for each value signal
    /// - The first terminal signal ends delivery: `on_error` for an error
    ///   item, `on_completed` when the stream ends
    /// - After a terminal notification the observer is never invoked again
    /// - Cancelling `cancellation_token` (or disposing the returned handle)
    ///   abandons delivery silently, with no terminal notification
    ///
    /// # Arguments
    ///
    /// * `observer` - The downstream consumer
    /// * `cancellation_token` - Optional externally owned token; if `None`,
    ///   a fresh token controlled solely by the returned handle is used
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Example
    ///
    /// ```
    /// use solo_core::{observer_fn, Signal};
    /// use solo_exec::SubscribeExt;
    /// use tokio::sync::oneshot;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (done_tx, done_rx) = oneshot::channel();
    /// let mut done_tx = Some(done_tx);
    ///
    /// let source = futures::stream::iter(vec![Signal::Value(7)]);
    /// let subscription = source.subscribe(
    ///     observer_fn(
    ///         |value: i32| assert_eq!(value, 7),
    ///         |error| panic!("unexpected error: {error}"),
    ///         move || {
    ///             if let Some(tx) = done_tx.take() {
    ///                 let _ = tx.send(());
    ///             }
    ///         },
    ///     ),
    ///     None,
    /// );
    ///
    /// done_rx.await.unwrap();
    /// assert!(subscription.is_disposed());
    /// # }
    /// ```
    fn subscribe<O>(self, observer: O, cancellation_token: Option<CancellationToken>) -> Subscription
    where
        O: Observer<T> + Send + 'static;
}

impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = Signal<T>> + Send + Unpin + 'static,
    T: Send + 'static,
{
    fn subscribe<O>(
        mut self,
        mut observer: O,
        cancellation_token: Option<CancellationToken>,
    ) -> Subscription
    where
        O: Observer<T> + Send + 'static,
    {
        let token = cancellation_token.unwrap_or_default();
        let driver_token = token.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    // Disposal wins over a ready item, so delivery stops
                    // deterministically once the handle is disposed.
                    biased;

                    () = driver_token.cancelled() => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("subscription disposed; abandoning delivery");
                        break;
                    }
                    item = self.next() => match item {
                        Some(Signal::Value(value)) => observer.on_next(value),
                        Some(Signal::Error(error)) => {
                            observer.on_error(error);
                            driver_token.cancel();
                            break;
                        }
                        None => {
                            observer.on_completed();
                            driver_token.cancel();
                            break;
                        }
                    },
                }
            }
        });

        Subscription::new(token)
    }
}
