use super::*;

/// One completed round of a player-vs-computer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub index: usize,
    pub human: Move,
    pub computer: Move,
}

impl Round {
    /// Outcome for the human.
    pub fn outcome(&self) -> Outcome {
        Outcome::from((self.human, self.computer))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let verdict = match self.outcome() {
            Outcome::Win => "Player wins!",
            Outcome::Loss => "Computer wins!",
            Outcome::Draw => "It's a draw!",
        };
        write!(
            f,
            "Round {}: Player: {} | Computer: {} → {}",
            self.index + 1,
            self.human,
            self.computer,
            verdict
        )
    }
}
