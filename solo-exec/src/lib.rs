// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription wiring for Solo streams.
//!
//! This crate connects a `Signal` stream to an [`Observer`](solo_core::Observer):
//! [`SubscribeExt::subscribe`] spawns a driver task that delivers signals to
//! the observer one at a time, in production order, and stops after the
//! first terminal notification. The returned [`Subscription`] handle
//! disposes the link; disposal is silent, idempotent and severs all future
//! delivery.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod subscribe;
pub mod subscribe_safe;
pub mod subscription;

pub use subscribe::SubscribeExt;
pub use subscribe_safe::SubscribeSafeExt;
pub use subscription::Subscription;
