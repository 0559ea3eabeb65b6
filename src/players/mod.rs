//! Move sources that can sit on the human side of a match.
//!
//! - [`Fish`] — Uniformly random, the hardest human to read
//! - [`Cycler`] — Repeats a fixed sequence
//! - [`Repeater`] — Always throws the same move
//! - [`Human`] — Interactive terminal prompt (requires `cli` feature)
mod cycler;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod repeater;

pub use cycler::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use repeater::*;

use crate::game::Move;
use crate::game::Round;
use std::fmt::Debug;
use std::fmt::Display;

pub trait Player: Debug + Display {
    /// Next move to throw. Never sees the computer's move of the same round.
    fn decide(&mut self) -> Move;
    /// Called once the round has been resolved.
    fn notify(&mut self, round: &Round) {
        let _ = round;
    }
}
