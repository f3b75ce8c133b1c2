// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the Solo single-element extraction library.
//!
//! This crate provides the foundation the operator crates build on:
//!
//! - [`Signal`]: the tagged union carried by every Solo stream, holding either
//!   a value or a terminal error. Completion is represented by stream
//!   termination, following Rx-style semantics.
//! - [`SoloError`]: the root error type for all Solo operations.
//! - [`Observer`]: the three-entry-point callback capability set
//!   (`on_next` / `on_error` / `on_completed`) consumed by the subscription
//!   layer.
//! - [`Subject`]: a hot push source that broadcasts signals to subscribers.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod error;
pub mod observer;
pub mod signal;
pub mod subject;
pub mod subject_error;

pub use error::{Result, SoloError};
pub use observer::{observer_fn, FnObserver, Observer};
pub use signal::Signal;
pub use subject::{Subject, SubjectStream};
pub use subject_error::SubjectError;
