use crate::game::Move;

/// What the pattern model believes the human will play next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// Fewer than `k` moves observed; callers fall back to randomness.
    Unavailable,
    /// Derived from prior occurrences of the current signature.
    Learned(Move),
    /// Current signature never seen before; a uniform guess.
    Guess(Move),
}

impl Prediction {
    pub fn mv(&self) -> Option<Move> {
        match self {
            Self::Unavailable => None,
            Self::Learned(mv) | Self::Guess(mv) => Some(*mv),
        }
    }
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "unavailable"),
            Self::Learned(mv) => write!(f, "learned {}", mv),
            Self::Guess(mv) => write!(f, "guess {}", mv),
        }
    }
}
