//! The game state machine
//!
//! A pure reducer over [`GameState`]: front-ends send [`Intent`]s and render
//! the returned state. No I/O, no timers, no interior mutability — callers
//! that share a state across threads only need to serialize their own calls.

mod attempt;
mod engine;

pub use attempt::{Attempt, Cell};
pub use engine::{GameState, GameStatus, Intent, ValidationError};
