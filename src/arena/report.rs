use crate::Probability;
use crate::engine::Difficulty;
use crate::game::Outcome;
use crate::game::Scoreboard;

/// Aggregate result of a simulated run.
#[derive(Debug, Clone)]
pub struct Report {
    pub player: String,
    pub difficulty: Difficulty,
    pub score: Scoreboard,
}

impl Report {
    pub fn new(player: String, difficulty: Difficulty) -> Self {
        Self {
            player,
            difficulty,
            score: Scoreboard::default(),
        }
    }
    pub fn tally(&mut self, outcome: Outcome) {
        self.score.tally(outcome);
    }
    pub fn rounds(&self) -> usize {
        self.score.played()
    }
    pub fn computer_win_rate(&self) -> Probability {
        self.rate(self.score.computer)
    }
    pub fn human_win_rate(&self) -> Probability {
        self.rate(self.score.human)
    }
    pub fn draw_rate(&self) -> Probability {
        self.rate(self.score.draws)
    }
    fn rate(&self, count: usize) -> Probability {
        match self.rounds() {
            0 => 0.,
            n => count as Probability / n as Probability,
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} vs {} over {} rounds", self.player, self.difficulty, self.rounds())?;
        writeln!(f, "┌──────────┬────────┬──────────┐")?;
        writeln!(f, "│ Result   │ Rounds │     Rate │")?;
        writeln!(f, "├──────────┼────────┼──────────┤")?;
        writeln!(f, "│ Computer │ {:>6} │ {:>8.3} │", self.score.computer, self.computer_win_rate())?;
        writeln!(f, "│ Human    │ {:>6} │ {:>8.3} │", self.score.human, self.human_win_rate())?;
        writeln!(f, "│ Draw     │ {:>6} │ {:>8.3} │", self.score.draws, self.draw_rate())?;
        writeln!(f, "└──────────┴────────┴──────────┘")?;
        writeln!(f, "target computer win rate {:.3}", self.difficulty.ai_win_rate())?;
        Ok(())
    }
}
