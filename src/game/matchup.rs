use super::*;
use crate::config::Settings;
use crate::engine::Difficulty;
use crate::engine::Opponent;

/// Best-of-N player-vs-computer match.
///
/// Each round the human's move is recorded first, then the computer picks
/// its move from the history that now includes it.
#[derive(Debug, Clone)]
pub struct Match {
    rounds: usize,
    opponent: Opponent,
    score: Scoreboard,
    log: Vec<Round>,
}

impl From<&Settings> for Match {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.rounds, Opponent::from(settings))
    }
}

impl Match {
    pub fn new(rounds: usize, opponent: Opponent) -> Self {
        Self {
            rounds,
            opponent,
            score: Scoreboard::default(),
            log: Vec::new(),
        }
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }
    pub fn history(&self) -> &[Round] {
        &self.log
    }
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }
    pub fn difficulty(&self) -> Difficulty {
        self.opponent.difficulty()
    }

    /// Rounds exhausted, or one side holds a majority that cannot be caught.
    pub fn is_over(&self) -> bool {
        self.score.played() >= self.rounds
            || self.score.human > self.rounds / 2
            || self.score.computer > self.rounds / 2
    }
    /// Final result for the human, once the match is over.
    pub fn winner(&self) -> Option<Outcome> {
        self.is_over().then(|| self.score.leader())
    }

    pub fn play(&mut self, human: Move) -> anyhow::Result<Round> {
        if self.is_over() {
            anyhow::bail!("match already decided: {}", self.score);
        }
        self.opponent.record_human_move(human);
        let computer = self.opponent.select_computer_move();
        let round = Round {
            index: self.log.len(),
            human,
            computer,
        };
        self.score.tally(round.outcome());
        self.log.push(round);
        if let Some(result) = self.winner() {
            log::info!(
                "match over after {} rounds on {}: {} ({})",
                self.score.played(),
                self.difficulty(),
                result,
                self.score
            );
        }
        Ok(round)
    }

    /// New match with the same format; the opponent forgets everything.
    pub fn reset(&mut self) {
        self.score = Scoreboard::default();
        self.log.clear();
        self.opponent.reset_match();
    }
    /// Changing the tier starts a fresh match.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.opponent.set_difficulty(difficulty);
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(rounds: usize) -> Match {
        Match::new(rounds, Opponent::seeded(&Settings::default(), 3))
    }

    #[test]
    fn ends_after_all_rounds() {
        let mut game = fixture(5);
        let mut played = 0;
        while !game.is_over() {
            game.play(Move::Rock).unwrap();
            played += 1;
        }
        assert!((1..=5).contains(&played));
        assert_eq!(played, game.score().played());
        assert!(game.winner().is_some());
        assert!(game.play(Move::Rock).is_err());
    }

    #[test]
    fn majority_ends_early() {
        let mut game = fixture(7);
        game.score = Scoreboard {
            human: 4,
            computer: 0,
            draws: 0,
        };
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Outcome::Win));
    }

    #[test]
    fn level_scores_after_all_rounds_is_a_draw() {
        let mut game = fixture(2);
        game.score = Scoreboard {
            human: 1,
            computer: 1,
            draws: 0,
        };
        assert_eq!(game.winner(), Some(Outcome::Draw));
    }

    #[test]
    fn rounds_are_logged_and_scored() {
        let mut game = fixture(99);
        for mv in Move::all().into_iter().cycle().take(20) {
            let round = game.play(mv).unwrap();
            assert_eq!(round.human, mv);
        }
        assert_eq!(game.history().len(), 20);
        assert_eq!(game.score().played(), 20);
        assert_eq!(game.opponent().model().history().len(), 20);
        let wins = game
            .history()
            .iter()
            .filter(|r| r.outcome() == Outcome::Win)
            .count();
        assert_eq!(wins, game.score().human);
    }

    #[test]
    fn human_move_is_learned_before_the_computer_answers() {
        let settings = Settings {
            difficulty: Difficulty::Hard,
            exploration_rate: 0.,
            ..Settings::default()
        };
        let mut game = Match::new(99, Opponent::seeded(&settings, 11));
        for _ in 0..4 {
            game.play(Move::Rock).unwrap();
        }
        let papers = (0..40)
            .filter(|_| game.play(Move::Rock).unwrap().computer == Move::Paper)
            .count();
        // RRR has only ever been followed by Rock, so every move is Paper or Scissors
        assert!(game.history()[4..].iter().all(|r| r.computer != Move::Rock));
        assert!(papers > 20, "{}", papers);
    }

    #[test]
    fn changing_difficulty_resets() {
        let mut game = fixture(9);
        game.play(Move::Paper).unwrap();
        game.play(Move::Paper).unwrap();
        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.score().played(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.opponent().model().history().len(), 0);
    }
}
