//! Game lifecycle for bowling.
//!
//! The controller gates roll input on the game phase:
//!
//! ```text
//! NotStarted --start()--> InProgress --(tenth frame closes)--> Finished
//!      any phase --restart()--> InProgress
//! ```

use super::action::{RollError, RollOutcome};
use super::board::Board;
use super::error::InvalidTransition;
use super::snapshot::GameSnapshot;
use super::types::Phase;
use tracing::{debug, info, instrument};

/// Owns one board and the phase of the game being played on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameController {
    board: Board,
    phase: Phase,
}

impl GameController {
    /// Creates a controller for a game that has not started.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::NotStarted,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless the game has not started yet.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) -> Result<(), InvalidTransition> {
        if self.phase != Phase::NotStarted {
            return Err(InvalidTransition::new(self.phase, Phase::InProgress));
        }
        self.phase = Phase::InProgress;
        info!("Game started");
        Ok(())
    }

    /// Throws the board away and starts a fresh game immediately.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.phase = Phase::InProgress;
        info!("Game restarted");
    }

    /// Submits a roll value.
    ///
    /// Ignored unless the game is in progress. Finishes the game when the
    /// roll closes the tenth frame.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_roll(&mut self, value: i32) -> RollOutcome {
        if !self.phase.accepts_rolls() {
            debug!("Roll ignored outside play");
            return RollOutcome::rejected();
        }

        let outcome = self.board.record_roll(value);
        if outcome.game_complete {
            self.phase = Phase::Finished;
            info!(total = self.board.total_score(), "Game finished");
        }
        outcome
    }

    /// Validates a roll value without recording it.
    ///
    /// # Errors
    ///
    /// Returns `NotInProgress` outside play, otherwise whatever
    /// [`Board::check_roll`] reports.
    pub fn check_roll(&self, value: i32) -> Result<u8, RollError> {
        if !self.phase.accepts_rolls() {
            return Err(RollError::NotInProgress(self.phase));
        }
        self.board.check_roll(value)
    }

    /// Returns true if [`GameController::submit_roll`] would accept the value.
    pub fn would_accept(&self, value: i32) -> bool {
        self.check_roll(value).is_ok()
    }

    /// Pin counts the next roll may take; empty outside play.
    pub fn accepted_values(&self) -> Vec<u8> {
        if self.phase.accepts_rolls() {
            self.board.accepted_values()
        } else {
            Vec::new()
        }
    }

    /// Read-only view of the game for presentation.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.phase, &self.board)
    }

    /// Starts a new game and submits every value in order.
    ///
    /// Rejected values are skipped, exactly as [`GameController::submit_roll`]
    /// skips them.
    #[instrument]
    pub fn replay(values: &[i32]) -> Self {
        let mut game = Self::new();
        game.restart();
        for &value in values {
            game.submit_roll(value);
        }
        game
    }
}
