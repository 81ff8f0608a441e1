mod action;
mod board;
mod contracts;
mod controller;
mod error;
pub mod invariants;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Roll, RollError, RollOutcome};
pub use board::Board;
pub use contracts::{Contract, FrameOpen, LegalRoll, PinsStanding, RollContract};
pub use controller::GameController;
pub use error::{BoardError, InvalidTransition};
pub use invariants::{
    BowlingInvariants, FrameCapInvariant, Invariant, InvariantSet, InvariantViolation,
    PendingCreditsInvariant, ScoreLedgerInvariant,
};
pub use snapshot::{FrameView, GameSnapshot};
pub use types::{FRAME_COUNT, Frame, LAST_FRAME, PIN_COUNT, PendingCredit, Phase};
