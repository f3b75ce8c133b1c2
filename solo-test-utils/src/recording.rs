// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer that records every notification it receives.
//!
//! Subscription tests hand a [`RecordingObserver`] to the driver and assert
//! on the captured event log afterwards.

use std::sync::Arc;

use parking_lot::Mutex;
use solo_core::{Observer, SoloError};

/// One notification as seen by a [`RecordingObserver`].
#[derive(Debug, Clone)]
pub enum ObservedEvent<T> {
    Next(T),
    Error(SoloError),
    Completed,
}

impl<T> ObservedEvent<T> {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::Completed)
    }
}

/// An observer that appends every notification to a shared log.
pub struct RecordingObserver<T> {
    events: Arc<Mutex<Vec<ObservedEvent<T>>>>,
}

impl<T> RecordingObserver<T> {
    /// Creates the observer together with the shared log handle.
    pub fn new() -> (Self, Arc<Mutex<Vec<ObservedEvent<T>>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

impl<T> Observer<T> for RecordingObserver<T> {
    fn on_next(&mut self, value: T) {
        self.events.lock().push(ObservedEvent::Next(value));
    }

    fn on_error(&mut self, error: SoloError) {
        self.events.lock().push(ObservedEvent::Error(error));
    }

    fn on_completed(&mut self) {
        self.events.lock().push(ObservedEvent::Completed);
    }
}
