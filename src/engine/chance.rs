//! Source of the engine's random draws.
use crate::Probability;
use crate::game::Move;

/// Every random decision the engine makes goes through this seam, so a
/// round can be replayed exactly by replaying its draws.
pub trait Chance {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> Probability;
    /// Uniform draw over the three moves.
    fn uniform(&mut self) -> Move;
}

impl<R> Chance for R
where
    R: rand::Rng,
{
    fn unit(&mut self) -> Probability {
        self.random::<Probability>()
    }
    fn uniform(&mut self) -> Move {
        Move::from(self.random_range(0..3u8))
    }
}
