//! The adaptive opponent engine.
//!
//! - `history` — Append-only log of the human's moves in the current match
//! - `signature` — The `k` most recent moves, used as a lookup key
//! - `weights` — Decayed signature → follower transition weights
//! - `pattern` — Learns from observed moves and predicts the next one
//! - `prediction` — Unavailable, learned or guessed next move
//! - `difficulty` — Tier → target win rate and exploration rate
//! - `selector` — Turns a prediction into a biased computer move
//! - `opponent` — The in-process API consumed by the game loop
//! - `chance` — Seam for every random draw the engine makes

mod chance;
mod difficulty;
mod history;
mod opponent;
mod pattern;
mod prediction;
mod selector;
mod signature;
mod weights;

pub use chance::*;
pub use difficulty::*;
pub use history::*;
pub use opponent::*;
pub use pattern::*;
pub use prediction::*;
pub use selector::*;
pub use signature::*;
pub use weights::*;
