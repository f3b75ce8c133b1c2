// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `single` operator family.
//!
//! Each operator subscribes to exactly one upstream stream, tracks at most
//! one candidate value and, on termination, either forwards that candidate
//! (or a configured fallback) or an error. A second qualifying element is an
//! error in its own right and is reported immediately.
//!
//! # Behavior
//!
//! - No output is produced while the source is still live, except the
//!   "more than one element" error which fires as soon as the second
//!   qualifying element arrives
//! - Downstream receives at most one value, and a value is always the last
//!   item before the stream ends
//! - Upstream errors are forwarded unchanged
//! - Every terminal path drops the upstream stream, severing delivery
//!
//! # Example
//!
//! ```rust
//! use futures::StreamExt;
//! use solo_core::Signal;
//! use solo_stream::SingleExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = futures::stream::iter([3, 7, 2].map(Signal::Value));
//!
//! let mut result = Box::pin(source.single_where(|x| Ok(*x > 5)));
//!
//! assert_eq!(result.next().await, Some(Signal::Value(7)));
//! assert_eq!(result.next().await, None);
//! # }
//! ```
//!
//! # Use Cases
//!
//! - Asserting a lookup produced exactly one hit
//! - Collapsing a configuration stream to its sole effective entry
//! - Guarding invariants on fan-in pipelines that must stay single-valued

mod implementation;

pub use implementation::ExtractSingle;

use futures::Stream;
use solo_core::{Result, Signal};

/// Predicate slot used by the unconditional variants.
type AcceptAll<T> = fn(&T) -> Result<bool>;

/// Extension trait providing the `single` operator family for signal
/// streams.
pub trait SingleExt<T>: Stream<Item = Signal<T>> + Sized {
    /// Requires the source to emit exactly one element and forwards it when
    /// the source completes.
    ///
    /// Emits `SoloError::NoElements` if the source completes empty, and
    /// `SoloError::MoreThanOneElement` as soon as a second element arrives.
    fn single(self) -> ExtractSingle<Self, T, AcceptAll<T>>;

    /// Requires the source to emit exactly one element satisfying
    /// `predicate` and forwards it when the source completes.
    ///
    /// Elements failing the predicate are skipped. A predicate error is
    /// forwarded downstream unchanged and terminates the stream; the element
    /// that raised it never becomes a candidate.
    fn single_where<P>(self, predicate: P) -> ExtractSingle<Self, T, P>
    where
        P: Fn(&T) -> Result<bool>;

    /// Like [`single`](Self::single), but an empty source yields `fallback`
    /// instead of an error.
    ///
    /// A second element is still an error: the fallback only substitutes for
    /// absence, never for excess.
    fn single_or(self, fallback: T) -> ExtractSingle<Self, T, AcceptAll<T>>;

    /// Like [`single_where`](Self::single_where), but a source with no
    /// matching element yields `fallback` instead of an error.
    fn single_where_or<P>(self, predicate: P, fallback: T) -> ExtractSingle<Self, T, P>
    where
        P: Fn(&T) -> Result<bool>;
}

impl<S, T> SingleExt<T> for S
where
    S: Stream<Item = Signal<T>> + Sized,
{
    fn single(self) -> ExtractSingle<Self, T, AcceptAll<T>> {
        ExtractSingle::new(self, None, None)
    }

    fn single_where<P>(self, predicate: P) -> ExtractSingle<Self, T, P>
    where
        P: Fn(&T) -> Result<bool>,
    {
        ExtractSingle::new(self, Some(predicate), None)
    }

    fn single_or(self, fallback: T) -> ExtractSingle<Self, T, AcceptAll<T>> {
        ExtractSingle::new(self, None, Some(fallback))
    }

    fn single_where_or<P>(self, predicate: P, fallback: T) -> ExtractSingle<Self, T, P>
    where
        P: Fn(&T) -> Result<bool>,
    {
        ExtractSingle::new(self, Some(predicate), Some(fallback))
    }
}
