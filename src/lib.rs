//! Strictly Bowling library - type-safe ten-pin bowling scoring
//!
//! Tracks a single player's game from a sequence of roll values, crediting
//! strikes and spares with the pins of the rolls that follow them.
//!
//! # Architecture
//!
//! - **Board**: ten frames, the pending bonus ledger and the active frame
//! - **GameController**: the NotStarted / InProgress / Finished phase machine
//! - **Rules**: pure strike, spare, standing-pin and completion checks
//! - **Contracts & invariants**: roll preconditions and postconditions
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{GameController, Phase};
//!
//! let mut game = GameController::new();
//! game.start().expect("fresh game starts");
//!
//! for pins in [5, 5, 3] {
//!     game.submit_roll(pins);
//! }
//!
//! assert_eq!(game.board().frames()[0].score(), 13);
//! assert_eq!(game.phase(), Phase::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Crate-level exports - Engine
pub use games::bowling::{
    Board, FRAME_COUNT, Frame, GameController, LAST_FRAME, PIN_COUNT, PendingCredit, Phase,
};

// Crate-level exports - Rolls and errors
pub use games::bowling::{BoardError, InvalidTransition, Roll, RollError, RollOutcome};

// Crate-level exports - Presentation views
pub use games::bowling::{FrameView, GameSnapshot};

// Crate-level exports - Contracts and invariants
pub use games::bowling::{
    BowlingInvariants, Contract, FrameCapInvariant, FrameOpen, Invariant, InvariantSet,
    InvariantViolation, LegalRoll, PendingCreditsInvariant, PinsStanding, RollContract,
    ScoreLedgerInvariant,
};

// Crate-level exports - Rules
pub use games::bowling::rules;
