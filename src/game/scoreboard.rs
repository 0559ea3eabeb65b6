use super::*;

/// Running tally of a match, counted from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human: usize,
    pub computer: usize,
    pub draws: usize,
}

impl Scoreboard {
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.human += 1,
            Outcome::Loss => self.computer += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn played(&self) -> usize {
        self.human + self.computer + self.draws
    }
    /// Leader from the human's side; `Draw` when level.
    pub fn leader(&self) -> Outcome {
        match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Player: {} | Computer: {} | Draws: {}",
            self.human, self.computer, self.draws
        )
    }
}
