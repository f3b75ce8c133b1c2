// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream wrapper that injects error signals at chosen positions.
//!
//! Useful for exercising the error-forwarding paths of operators without
//! hand-rolling a channel choreography in every test.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use solo_core::{Signal, SoloError};

/// Wraps a stream of plain values in `Signal::Value`, injecting a
/// `Signal::Error` at the given position (0-indexed, counted across all
/// emitted items).
///
/// # Examples
///
/// ```rust
/// use futures::{stream, StreamExt};
/// use solo_core::Signal;
/// use solo_test_utils::ErrorInjectingStream;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut wrapped = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1);
///
/// assert!(matches!(wrapped.next().await, Some(Signal::Value(1))));
/// assert!(matches!(wrapped.next().await, Some(Signal::Error(_))));
/// assert!(matches!(wrapped.next().await, Some(Signal::Value(2))));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Creates a wrapper that injects one error at position
    /// `inject_error_at`.
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S, T> Stream for ErrorInjectingStream<S>
where
    S: Stream<Item = T> + Unpin,
    T: Unpin,
{
    type Item = Signal<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        if this.inject_error_at == Some(this.count) {
            this.inject_error_at = None;
            this.count += 1;
            return Poll::Ready(Some(Signal::Error(SoloError::stream_error(
                "injected error",
            ))));
        }

        match Pin::new(&mut this.inner).poll_next(cx) {
            Poll::Ready(Some(value)) => {
                this.count += 1;
                Poll::Ready(Some(Signal::Value(value)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
