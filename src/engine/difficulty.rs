use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// Difficulty tier, bound to a target computer win rate.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy = 0,
    #[default]
    Medium = 1,
    Hard = 2,
}

impl Difficulty {
    pub const fn all() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }
    /// Probability that the computer should end a round as winner.
    pub const fn ai_win_rate(&self) -> Probability {
        match self {
            Self::Easy => crate::EASY_AI_WIN_RATE,
            Self::Medium => crate::MEDIUM_AI_WIN_RATE,
            Self::Hard => crate::HARD_AI_WIN_RATE,
        }
    }
    /// Probability of ignoring the prediction entirely. Identical across tiers.
    pub const fn exploration_rate(&self) -> Probability {
        crate::EXPLORATION_RATE
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(anyhow::anyhow!(
                "invalid difficulty {:?}, expected one of easy, medium, hard",
                s
            )),
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Easy),
            1 => Ok(Self::Medium),
            2 => Ok(Self::Hard),
            _ => Err(anyhow::anyhow!("invalid difficulty index {}, expected 0..=2", n)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}
