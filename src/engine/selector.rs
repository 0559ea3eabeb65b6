//! Two-stage randomized bias over the pattern model's prediction.
//!
//! First stage: explore (ignore the prediction) or exploit it. Second stage:
//! contest the round (beat the prediction) or yield it (lose to the
//! prediction), with the contest probability set by the difficulty tier.
//! Without a prediction both branches fall back to a uniform move, so an
//! unpredictable human cannot be pushed away from an even contest.
use super::*;
use crate::Probability;
use crate::game::Move;

/// Which way the second draw pushed the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Play the move that beats the prediction.
    Contest,
    /// Play the move that loses to the prediction.
    Yield,
}

/// Everything that went into one computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub explored: bool,
    pub prediction: Prediction,
    pub branch: Branch,
    pub mv: Move,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}{}, {:?})",
            self.mv,
            if self.explored { "explore, " } else { "" },
            self.prediction,
            self.branch
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoveSelector {
    exploration: Probability,
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(crate::EXPLORATION_RATE)
    }
}

impl MoveSelector {
    pub fn new(exploration: Probability) -> Self {
        Self { exploration }
    }
    pub fn exploration(&self) -> Probability {
        self.exploration
    }

    /// Produces one computer move. Stateless: identical draws against an
    /// identical model always yield the identical decision.
    pub fn select<C>(&self, model: &PatternModel, difficulty: Difficulty, chance: &mut C) -> Decision
    where
        C: Chance + ?Sized,
    {
        let explored = chance.unit() < self.exploration;
        let prediction = if explored {
            Prediction::Unavailable
        } else {
            model.predict(chance)
        };
        let branch = if chance.unit() < difficulty.ai_win_rate() {
            Branch::Contest
        } else {
            Branch::Yield
        };
        let mv = match (prediction.mv(), branch) {
            (Some(predicted), Branch::Contest) => predicted.beater(),
            (Some(predicted), Branch::Yield) => predicted.loser(),
            (None, _) => chance.uniform(),
        };
        Decision {
            explored,
            prediction,
            branch,
            mv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chance::scripted::Scripted;

    fn model(moves: &[Move]) -> PatternModel {
        let mut model = PatternModel::default();
        moves.iter().copied().for_each(|m| model.observe(m));
        model
    }

    #[test]
    fn contest_beats_learned_prediction() {
        use Move::*;
        let model = model(&[Rock, Paper, Scissors, Rock, Paper, Scissors]);
        let ref mut chance = Scripted::new(&[0.5, 0.1], &[]);
        let decision = MoveSelector::default().select(&model, Difficulty::Hard, chance);
        assert_eq!(decision.prediction, Prediction::Learned(Rock));
        assert_eq!(decision.branch, Branch::Contest);
        assert_eq!(decision.mv, Paper);
        assert!(chance.exhausted());
    }

    #[test]
    fn yield_loses_to_learned_prediction() {
        use Move::*;
        let model = model(&[Rock, Paper, Scissors, Rock, Paper, Scissors]);
        let ref mut chance = Scripted::new(&[0.5, 0.9], &[]);
        let decision = MoveSelector::default().select(&model, Difficulty::Hard, chance);
        assert_eq!(decision.branch, Branch::Yield);
        assert_eq!(decision.mv, Scissors);
    }

    #[test]
    fn win_draw_is_compared_against_tier() {
        use Move::*;
        let model = model(&[Rock, Rock, Rock, Rock]);
        for (tier, contest) in [
            (Difficulty::Easy, false),
            (Difficulty::Medium, true),
            (Difficulty::Hard, true),
        ] {
            let ref mut chance = Scripted::new(&[0.99, 0.5], &[]);
            let decision = MoveSelector::default().select(&model, tier, chance);
            let expected = if contest { Paper } else { Scissors };
            assert_eq!(decision.mv, expected, "{}", tier);
        }
    }

    #[test]
    fn exploration_skips_prediction() {
        use Move::*;
        let model = model(&[Rock, Rock, Rock, Rock]);
        let ref mut chance = Scripted::new(&[0.05, 0.1], &[Scissors]);
        let decision = MoveSelector::default().select(&model, Difficulty::Hard, chance);
        assert!(decision.explored);
        assert_eq!(decision.prediction, Prediction::Unavailable);
        assert_eq!(decision.mv, Scissors);
        assert!(chance.exhausted());
    }

    #[test]
    fn short_history_plays_uniformly() {
        let model = model(&[Move::Rock]);
        let ref mut chance = Scripted::new(&[0.9, 0.1], &[Move::Rock]);
        let decision = MoveSelector::default().select(&model, Difficulty::Hard, chance);
        assert!(!decision.explored);
        assert_eq!(decision.prediction, Prediction::Unavailable);
        assert_eq!(decision.mv, Move::Rock);
    }

    #[test]
    fn guessed_prediction_is_still_biased() {
        use Move::*;
        // signature SRP has never been followed, so the model guesses
        let model = model(&[Rock, Paper, Scissors, Rock, Paper]);
        let ref mut chance = Scripted::new(&[0.5, 0.1], &[Scissors]);
        let decision = MoveSelector::default().select(&model, Difficulty::Hard, chance);
        assert_eq!(decision.prediction, Prediction::Guess(Scissors));
        assert_eq!(decision.mv, Rock);
        assert!(chance.exhausted());
    }

    #[test]
    fn identical_draws_identical_decisions() {
        use Move::*;
        let model = model(&[Paper, Scissors, Paper, Scissors, Paper]);
        let select = || {
            let ref mut chance = Scripted::new(&[0.3, 0.6], &[Rock]);
            MoveSelector::default().select(&model, Difficulty::Medium, chance)
        };
        assert_eq!(select(), select());
    }
}
