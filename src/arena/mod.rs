//! Headless play for measuring how close realized win rates land to the
//! difficulty targets.
//!
//! A single [`Opponent`](crate::engine::Opponent) faces a scripted player for
//! many rounds without resetting, as if one very long match were played.

mod report;
mod simulate;

pub use report::*;
pub use simulate::*;
