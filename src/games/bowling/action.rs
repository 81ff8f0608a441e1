//! First-class roll types for bowling.
//!
//! A roll is a domain event: the pins knocked down by one delivery,
//! recorded against the frame that received it. Rolls can be validated
//! before they are applied and replayed afterwards.

use super::Phase;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// Frame that received the roll (0-9).
    pub frame: usize,
    /// Pins knocked down (0-10).
    pub pins: u8,
}

impl Roll {
    /// Creates a new roll.
    #[instrument]
    pub fn new(frame: usize, pins: u8) -> Self {
        Self { frame, pins }
    }

    /// Returns the frame that received this roll.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Returns the pins knocked down.
    pub fn pins(&self) -> u8 {
        self.pins
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame {}: {}", self.frame + 1, self.pins)
    }
}

/// Reason a roll value was rejected.
///
/// Rejections are never raised by `submit_roll`; they are reported by the
/// `check_roll` queries so callers can explain a disabled input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RollError {
    /// The value is not a pin count between 0 and 10.
    #[display("Roll value {} is outside 0-10", _0)]
    OutOfRange(i32),

    /// The value knocks down more pins than are standing.
    #[display("Cannot knock down {} pins with only {} standing", value, standing)]
    FrameOverflow {
        /// Pins standing before the roll.
        standing: u8,
        /// Pins the roll claimed.
        value: u8,
    },

    /// The active frame takes no more rolls.
    #[display("Active frame is already complete")]
    FrameClosed,

    /// Rolls are only accepted while the game is in progress.
    #[display("Game is {}, not in progress", _0)]
    NotInProgress(Phase),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for RollError {}

/// What happened when a roll value was submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The roll was recorded.
    pub accepted: bool,
    /// The active frame moved to the next frame.
    pub frame_advanced: bool,
    /// The tenth frame closed with this roll.
    pub game_complete: bool,
}

impl RollOutcome {
    /// Outcome of a rejected roll: nothing changed.
    pub fn rejected() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_display_is_one_based() {
        assert_eq!(Roll::new(0, 7).to_string(), "frame 1: 7");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RollError::FrameOverflow { standing: 4, value: 5 }.to_string(),
            "Cannot knock down 5 pins with only 4 standing"
        );
        assert_eq!(
            RollError::NotInProgress(Phase::Finished).to_string(),
            "Game is finished, not in progress"
        );
    }

    #[test]
    fn test_rejected_outcome_is_empty() {
        let outcome = RollOutcome::rejected();
        assert!(!outcome.accepted);
        assert!(!outcome.frame_advanced);
        assert!(!outcome.game_complete);
    }
}
