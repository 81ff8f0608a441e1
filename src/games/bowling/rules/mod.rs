//! Scoring rules for ten-pin bowling.
//!
//! Pure functions over a frame's rolls. The board applies them when
//! recording a roll, and presentation code calls the same functions to
//! decide which pin counts to offer, so the pin cap is defined once.

pub mod completion;
pub mod marks;
pub mod pins;

pub use completion::{earns_fill_ball, is_complete, roll_limit};
pub use marks::{is_spare, is_strike, render_marks};
pub use pins::standing_pins;
