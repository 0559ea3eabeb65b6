//! Rules of the game: moves, round outcomes and match flow.

mod matchup;
mod moves;
mod outcome;
mod round;
mod scoreboard;

pub use matchup::*;
pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use scoreboard::*;
