//! Turn sequencing and game-end resolution.
//!
//! Tracks whose move it is and when a round completes, and decides from
//! piece connectivity whether the game is won, drawn, or still running.

pub mod connectivity;
pub mod round;

pub use connectivity::{evaluate, groups, is_connected, reachable_set, Outcome, TerminalState};
pub use round::{RoundError, RoundEvent, RoundState, RoundTracker};
