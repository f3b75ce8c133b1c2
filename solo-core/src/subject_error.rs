// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

use crate::SoloError;

/// Errors specific to subject operations (lifecycle and broadcasting).
///
/// These are distinct from stream processing errors; convert to
/// [`SoloError`] when one must be propagated through a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items or
    /// subscribers.
    Closed,
}

impl fmt::Display for SubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Subject is closed"),
        }
    }
}

impl std::error::Error for SubjectError {}

impl From<SubjectError> for SoloError {
    fn from(error: SubjectError) -> Self {
        match error {
            SubjectError::Closed => SoloError::stream_error("Subject is closed"),
        }
    }
}
