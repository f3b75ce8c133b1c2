// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SoloError;

/// A stream signal that is either a value or a terminal error.
///
/// Every Solo stream carries `Signal<T>` items so operators can propagate
/// errors in-band, following Rx-style semantics where an error terminates the
/// sequence. Completion carries no payload and is represented by the stream
/// ending (`None` from `poll_next`).
#[derive(Debug, Clone)]
pub enum Signal<T> {
    /// A successful value.
    Value(T),
    /// An error that terminates the stream.
    Error(SoloError),
}

impl<T: PartialEq> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Signal::Value(a), Signal::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Signal<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, Signal::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Signal::Error(_))
    }

    /// Converts from `Signal<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            Signal::Value(v) => Some(v),
            Signal::Error(_) => None,
        }
    }

    /// Converts from `Signal<T>` to `Option<SoloError>`, discarding values.
    pub fn err(self) -> Option<SoloError> {
        match self {
            Signal::Value(_) => None,
            Signal::Error(e) => Some(e),
        }
    }

    /// Maps a `Signal<T>` to `Signal<U>` by applying a function to the
    /// contained value.
    ///
    /// Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Signal<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Signal::Value(v) => Signal::Value(f(v)),
            Signal::Error(e) => Signal::Error(e),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the signal is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            Signal::Value(v) => v,
            Signal::Error(e) => {
                panic!("called `Signal::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }
}

impl<T> From<crate::Result<T>> for Signal<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(v) => Signal::Value(v),
            Err(e) => Signal::Error(e),
        }
    }
}

impl<T> From<Signal<T>> for crate::Result<T> {
    fn from(signal: Signal<T>) -> Self {
        match signal {
            Signal::Value(v) => Ok(v),
            Signal::Error(e) => Err(e),
        }
    }
}
