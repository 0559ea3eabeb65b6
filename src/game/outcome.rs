use super::*;

/// Result of a single round from the first party's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Same round seen from the other side of the table.
    pub const fn flip(&self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((mine, theirs): (Move, Move)) -> Self {
        if mine == theirs {
            Self::Draw
        } else if mine.beats(&theirs) {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
