// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Solo library.
//!
//! [`SoloError`] is the root error type carried by [`Signal::Error`]
//! (see [`crate::Signal`]). The single-element extraction operators raise the
//! cardinality variants (`MoreThanOneElement`, `NoElements` and their
//! predicate siblings) themselves; the remaining variants exist so that
//! upstream failures and user-code failures can travel through the same
//! channel.
//!
//! # Examples
//!
//! ```
//! use solo_core::{Result, SoloError};
//!
//! fn probe() -> Result<()> {
//!     Err(SoloError::stream_error("source not ready"))
//! }
//! ```

/// Root error type for all Solo operations.
#[derive(Debug, thiserror::Error)]
pub enum SoloError {
    /// The source produced a second element where exactly one was required.
    ///
    /// Raised by the extraction sink itself, never forwarded from upstream.
    #[error("Sequence contains more than one element")]
    MoreThanOneElement,

    /// The source produced a second element satisfying the predicate.
    #[error("Sequence contains more than one matching element")]
    MoreThanOneMatchingElement,

    /// The source completed without producing any element and no fallback
    /// value was configured.
    #[error("Sequence contains no elements")]
    NoElements,

    /// The source completed without any element satisfying the predicate and
    /// no fallback value was configured.
    #[error("Sequence contains no matching element")]
    NoMatchingElement,

    /// Stream processing encountered an error outside the other categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong.
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided functions so they can be
    /// propagated through the Solo error system without losing their source.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SoloError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if this error was raised by the extraction sink itself
    /// rather than forwarded from upstream or user code.
    #[must_use]
    pub const fn is_cardinality_violation(&self) -> bool {
        matches!(
            self,
            Self::MoreThanOneElement
                | Self::MoreThanOneMatchingElement
                | Self::NoElements
                | Self::NoMatchingElement
        )
    }
}

/// Specialized `Result` type for Solo operations.
pub type Result<T> = std::result::Result<T, SoloError>;

impl Clone for SoloError {
    fn clone(&self) -> Self {
        match self {
            Self::MoreThanOneElement => Self::MoreThanOneElement,
            Self::MoreThanOneMatchingElement => Self::MoreThanOneMatchingElement,
            Self::NoElements => Self::NoElements,
            Self::NoMatchingElement => Self::NoMatchingElement,
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed error cannot be cloned; preserve its rendering instead.
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}
