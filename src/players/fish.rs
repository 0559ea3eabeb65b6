use super::*;
use crate::engine::Chance;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Chooses uniformly at random every round.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Player for Fish {
    fn decide(&mut self) -> Move {
        self.0.uniform()
    }
}

impl std::fmt::Display for Fish {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Fish")
    }
}
