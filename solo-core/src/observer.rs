// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer capability set for downstream consumers.
//!
//! An [`Observer`] receives at most one value signal per subscription,
//! immediately followed by exactly one terminal notification: either
//! `on_completed` (right after the value) or `on_error` (with no value).
//! The subscription layer in `solo-exec` guarantees the entry points are
//! invoked sequentially and never after a terminal notification.

use crate::error::SoloError;

/// The three-entry-point callback interface for stream consumers.
///
/// This is a capability set, not a class hierarchy: any type implementing
/// these three operations can act as the downstream end of a subscription.
/// For ad-hoc consumers built from closures, see [`observer_fn`].
pub trait Observer<T> {
    /// An element was delivered by the source.
    fn on_next(&mut self, value: T);

    /// The source, an operator, or user code failed. Terminal.
    fn on_error(&mut self, error: SoloError);

    /// The source finished without error. Terminal.
    fn on_completed(&mut self);
}

/// An [`Observer`] assembled from three closures.
///
/// Constructed via [`observer_fn`].
pub struct FnObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_completed: C,
}

/// Builds an observer from `on_next`, `on_error` and `on_completed` closures.
///
/// # Examples
///
/// ```
/// use solo_core::{observer_fn, Observer};
///
/// let mut seen = Vec::new();
/// let mut observer = observer_fn(
///     |value: i32| seen.push(value),
///     |error| panic!("unexpected error: {error}"),
///     || {},
/// );
/// observer.on_next(7);
/// observer.on_completed();
/// drop(observer);
/// assert_eq!(seen, vec![7]);
/// ```
pub fn observer_fn<T, N, E, C>(on_next: N, on_error: E, on_completed: C) -> FnObserver<N, E, C>
where
    N: FnMut(T),
    E: FnMut(SoloError),
    C: FnMut(),
{
    FnObserver {
        on_next,
        on_error,
        on_completed,
    }
}

impl<T, N, E, C> Observer<T> for FnObserver<N, E, C>
where
    N: FnMut(T),
    E: FnMut(SoloError),
    C: FnMut(),
{
    fn on_next(&mut self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&mut self, error: SoloError) {
        (self.on_error)(error);
    }

    fn on_completed(&mut self) {
        (self.on_completed)();
    }
}
