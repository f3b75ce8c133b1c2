// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber push source.
//!
//! A [`Subject`] broadcasts each [`Signal<T>`] to all active subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past items, only items sent
//!   after subscribing.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same state.
//! - **Error/close**: An error is broadcast to all subscribers and closes
//!   the subject; once closed, delivery is severed permanently.
//!
//! ## Example
//!
//! ```
//! use solo_core::{Signal, Subject};
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(Signal::Value(1)));
//! assert_eq!(stream.next().await, Some(Signal::Value(2)));
//! assert_eq!(stream.next().await, None); // Subject closed
//! # }
//! ```

use std::pin::Pin;
use std::sync::Arc;

use async_channel::Sender;
use futures::stream::Stream;
use parking_lot::Mutex;

use crate::{Signal, SoloError, SubjectError};

/// Boxed stream handed out to each subscriber.
pub type SubjectStream<T> = Pin<Box<dyn Stream<Item = Signal<T>> + Send>>;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<Sender<Signal<T>>>,
}

/// A hot, unbounded subject that broadcasts signals to all current
/// subscribers.
///
/// `Subject` is the push entry point for feeding values into a Solo pipeline.
/// See the [module documentation](self) for examples.
pub struct Subject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates a new open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `Signal<T>`.
    ///
    /// Late subscribers do not receive previously sent items.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Send a signal to all active subscribers.
    ///
    /// Subscribers whose stream has been dropped are pruned lazily here.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, signal: Signal<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let mut live_senders = Vec::with_capacity(state.senders.len());
        for tx in state.senders.drain(..) {
            if tx.try_send(signal.clone()).is_ok() {
                live_senders.push(tx);
            }
        }
        state.senders = live_senders;

        Ok(())
    }

    /// Send a value to all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(Signal::Value(value))
    }

    /// Broadcast a terminal error to all subscribers and close the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject was already closed.
    pub fn error(&self, error: SoloError) -> Result<(), SubjectError> {
        let result = self.send(Signal::Error(error));
        self.close();
        result
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// Closing is idempotent. After closing, `send`, `next`, `error` and
    /// `subscribe` all report `SubjectError::Closed`.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Dropped subscribers are removed on the next `send`, not immediately.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
