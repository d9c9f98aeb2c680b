//! Error reporting collaborators
//!
//! Lenient rectangle operations do not return their validation errors.
//! They hand them to an injected [`ErrorReporter`] and carry on.

use crate::error::RectangleError;

/// Receives validation errors from report-and-continue operations
pub trait ErrorReporter {
    /// Handles one rejected width, height or side length
    fn report(&mut self, error: &RectangleError);
}

impl<F> ErrorReporter for F
where
    F: FnMut(&RectangleError),
{
    fn report(&mut self, error: &RectangleError) {
        self(error)
    }
}

/// Reporter that writes every error to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&mut self, error: &RectangleError) {
        log::error!("{}", error);
    }
}

/// Reporter that keeps every error it receives, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingReporter {
    errors: Vec<RectangleError>,
}

impl RecordingReporter {
    /// Creates a reporter with no recorded errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded errors, oldest first
    pub fn errors(&self) -> &[RectangleError] {
        &self.errors
    }

    /// Returns the recorded messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Forgets all recorded errors
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&mut self, error: &RectangleError) {
        self.errors.push(*error);
    }
}
