//! Game lifecycle and board loading errors.

use super::Phase;
use derive_more::{Display, Error};
use tracing::instrument;

/// A phase transition the state machine does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid transition from {} to {} at {}:{}", from, to, file, line)]
pub struct InvalidTransition {
    /// Phase the game was in.
    pub from: Phase,
    /// Phase that was requested.
    pub to: Phase,
    /// Line number where the transition was attempted.
    pub line: u32,
    /// Source file where the transition was attempted.
    pub file: &'static str,
}

impl InvalidTransition {
    /// Creates a new transition error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(from: Phase, to: Phase) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            from,
            to,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A stored board that cannot be played on.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {} at {}:{}", message, file, line)]
pub struct BoardError {
    /// Error message.
    pub message: String,
    /// Line number where the board was rejected.
    pub line: u32,
    /// Source file where the board was rejected.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
