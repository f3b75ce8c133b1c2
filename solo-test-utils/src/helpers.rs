// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use futures::stream::{Stream, StreamExt};
use solo_core::Signal;
use tokio::time::sleep;

/// Returns the next signal from the stream, panicking if nothing arrives
/// within `timeout_ms` or the stream ends first.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Signal<T>
where
    S: Stream<Item = Signal<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => item.expect("stream ended while a signal was expected"),
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("timed out waiting for a stream signal")
        }
    }
}

/// Extracts the value from a signal, panicking on an error signal.
pub fn unwrap_value<T>(signal: Signal<T>) -> T {
    signal.unwrap()
}

/// Asserts that the stream ends (yields `None`) within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = Signal<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "expected the stream to end, but a signal was emitted");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("timed out waiting for the stream to end")
        }
    }
}

/// Asserts that the stream stays silent for `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected emission, expected no output");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
