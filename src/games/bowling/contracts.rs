//! Contract-based validation for bowling.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Roll, RollError};
use super::board::Board;
use super::invariants::{BowlingInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RollError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RollError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The roll targets the active frame and that frame is open.
pub struct FrameOpen;

impl FrameOpen {
    /// Checks that the frame named by the roll can take another roll.
    #[instrument(skip(board))]
    pub fn check(roll: &Roll, board: &Board) -> Result<(), RollError> {
        if roll.frame != board.active_frame_index() || board.active_frame().is_complete() {
            Err(RollError::FrameClosed)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The roll knocks down no more pins than are standing.
pub struct PinsStanding;

impl PinsStanding {
    /// Checks the roll against the pins left on the active frame's rack.
    #[instrument(skip(board))]
    pub fn check(roll: &Roll, board: &Board) -> Result<(), RollError> {
        let standing = board.active_frame().standing_pins();
        if roll.pins > standing {
            Err(RollError::FrameOverflow {
                standing,
                value: roll.pins,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A roll is legal if its frame is open and the pins are standing.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    #[instrument(skip(board))]
    pub fn check(roll: &Roll, board: &Board) -> Result<(), RollError> {
        FrameOpen::check(roll, board)?;
        PinsStanding::check(roll, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for recording a roll.
///
/// Preconditions:
/// - Active frame is open
/// - Pins do not exceed those standing
///
/// Postconditions:
/// - Exactly one roll was appended to the history
/// - No frame score went down
/// - Frame caps, the score ledger and pending credits stay consistent
pub struct RollContract;

impl Contract<Board, Roll> for RollContract {
    fn pre(board: &Board, roll: &Roll) -> Result<(), RollError> {
        LegalRoll::check(roll, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), RollError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one roll"
            );
            return Err(RollError::InvariantViolation(
                "Postcondition failed: exactly one roll recorded".to_string(),
            ));
        }

        let lowered = before
            .frames()
            .iter()
            .zip(after.frames())
            .any(|(old, new)| new.score() < old.score());
        if lowered {
            warn!("Frame score decreased");
            return Err(RollError::InvariantViolation(
                "Postcondition failed: frame scores never decrease".to_string(),
            ));
        }

        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariants violated");
            RollError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
