// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures::Stream;
use pin_project::pin_project;
use solo_core::{Result, Signal, SoloError};

/// Stream adapter enforcing the "exactly one qualifying element" contract.
///
/// The adapter is a small state machine driven by upstream items:
///
/// - A qualifying element is recorded as the candidate; a second qualifying
///   element trips the more-than-one error immediately.
/// - Upstream completion resolves the outcome: the candidate, the fallback,
///   or the empty-sequence error.
/// - Upstream errors and predicate errors are forwarded unchanged.
///
/// Whichever way the adapter terminates, the upstream stream is dropped in
/// the same step, so nothing the source does afterwards can reach
/// downstream. Polling past the terminal item keeps returning
/// `Poll::Ready(None)`.
#[pin_project]
pub struct ExtractSingle<S, T, P> {
    // `None` doubles as the one-shot terminal guard: taken on the terminal
    // transition, before the terminal item is returned.
    #[pin]
    source: Option<S>,
    predicate: Option<P>,
    fallback: Option<T>,
    candidate: Option<T>,
}

impl<S, T, P> ExtractSingle<S, T, P> {
    pub(crate) fn new(source: S, predicate: Option<P>, fallback: Option<T>) -> Self {
        Self {
            source: Some(source),
            predicate,
            fallback,
            candidate: None,
        }
    }
}

impl<S, T, P> Stream for ExtractSingle<S, T, P>
where
    S: Stream<Item = Signal<T>>,
    P: Fn(&T) -> Result<bool>,
{
    type Item = Signal<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let Some(source) = this.source.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            match ready!(source.poll_next(cx)) {
                Some(Signal::Value(value)) => {
                    // The predicate runs before the "already seen" check, so
                    // a predicate failure supersedes candidate bookkeeping
                    // for this element entirely.
                    let qualifies = match this.predicate.as_ref() {
                        Some(predicate) => predicate(&value),
                        None => Ok(true),
                    };

                    match qualifies {
                        Ok(false) => {}
                        Ok(true) if this.candidate.is_none() => {
                            *this.candidate = Some(value);
                        }
                        Ok(true) => {
                            let error = if this.predicate.is_some() {
                                SoloError::MoreThanOneMatchingElement
                            } else {
                                SoloError::MoreThanOneElement
                            };
                            this.source.set(None);
                            return Poll::Ready(Some(Signal::Error(error)));
                        }
                        Err(error) => {
                            this.source.set(None);
                            return Poll::Ready(Some(Signal::Error(error)));
                        }
                    }
                }
                Some(Signal::Error(error)) => {
                    this.source.set(None);
                    return Poll::Ready(Some(Signal::Error(error)));
                }
                None => {
                    let outcome = match this.candidate.take().or_else(|| this.fallback.take()) {
                        Some(value) => Signal::Value(value),
                        None if this.predicate.is_some() => {
                            Signal::Error(SoloError::NoMatchingElement)
                        }
                        None => Signal::Error(SoloError::NoElements),
                    };
                    this.source.set(None);
                    return Poll::Ready(Some(outcome));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one item remains; zero once the terminal item is out.
        if self.source.is_some() {
            (0, Some(1))
        } else {
            (0, Some(0))
        }
    }
}
