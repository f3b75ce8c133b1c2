// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-element extraction operators for push-based async streams.
//!
//! This crate provides the `single` operator family: given a source stream
//! that emits zero or more [`Signal`](solo_core::Signal) items and eventually
//! ends (completion) or carries an error, each operator produces exactly one
//! downstream outcome and enforces the "at most one qualifying element"
//! contract.
//!
//! # Operator selection
//!
//! | Operator | Predicate | Empty source |
//! |----------|-----------|--------------|
//! | [`single`](SingleExt::single) | accepts every element | `NoElements` error |
//! | [`single_where`](SingleExt::single_where) | caller-supplied | `NoMatchingElement` error |
//! | [`single_or`](SingleExt::single_or) | accepts every element | emits the fallback |
//! | [`single_where_or`](SingleExt::single_where_or) | caller-supplied | emits the fallback |
//!
//! All four defer output until the source terminates, with one exception: a
//! second qualifying element is reported as an error the moment it is
//! observed, without waiting for completion.
//!
//! Predicates are fallible by signature (`Fn(&T) -> Result<bool>`); a
//! predicate error is forwarded downstream unchanged and terminates the
//! stream, and the element that caused it is never recorded as a candidate.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod single;

pub use single::SingleExt;
