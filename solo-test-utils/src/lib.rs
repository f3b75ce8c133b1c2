// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Solo workspace.
//!
//! This crate provides helper channels, assertion utilities, error-injecting
//! stream wrappers, a recording observer and small data fixtures for testing
//! the single-element extraction operators and the subscription layer. It is
//! intended for development and testing only.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod error_injection;
pub mod helpers;
pub mod person;
pub mod recording;
pub mod test_data;

use futures::{Stream, StreamExt};
use solo_core::Signal;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use person::Person;
pub use recording::{ObservedEvent, RecordingObserver};
pub use test_data::TestData;

/// Creates a test channel that automatically wraps sent values in
/// `Signal::Value`.
///
/// Tests send plain values; the stream side receives `Signal<T>`. Dropping
/// the sender completes the stream.
///
/// # Example
///
/// ```rust
/// use solo_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(7).unwrap();
///
/// let signal = stream.next().await.unwrap();
/// assert_eq!(signal.unwrap(), 7);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = Signal<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(Signal::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `Signal<T>` directly, so tests can
/// push explicit error signals alongside values.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<Signal<T>>,
    impl Stream<Item = Signal<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
