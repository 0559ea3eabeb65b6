use super::*;
use crate::config::Settings;
use crate::game::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The adaptive computer opponent for one match session.
///
/// Owns the human's history and learned transitions exclusively; callers
/// that share an opponent across threads must serialize access themselves.
/// The game loop records the human's move of a round and then asks for the
/// computer's move, so the prediction is the move that follows it.
#[derive(Debug, Clone)]
pub struct Opponent {
    model: PatternModel,
    selector: MoveSelector,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl Default for Opponent {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for Opponent {
    fn from(settings: &Settings) -> Self {
        Self::new(settings, SmallRng::from_os_rng())
    }
}

impl Opponent {
    fn new(settings: &Settings, rng: SmallRng) -> Self {
        Self {
            model: PatternModel::new(settings.pattern_length, settings.decay_factor),
            selector: MoveSelector::new(settings.exploration_rate),
            difficulty: settings.difficulty,
            rng,
        }
    }
    /// Reproducible opponent for simulation and tests.
    pub fn seeded(settings: &Settings, seed: u64) -> Self {
        Self::new(settings, SmallRng::seed_from_u64(seed))
    }

    pub fn record_human_move(&mut self, mv: Move) {
        self.model.observe(mv);
    }
    pub fn select_computer_move(&mut self) -> Move {
        self.decide().mv
    }
    /// Like [`Self::select_computer_move`], exposing how the move was reached.
    pub fn decide(&mut self) -> Decision {
        let decision = self
            .selector
            .select(&self.model, self.difficulty, &mut self.rng);
        log::debug!(
            "round {:>3} {:<6} history {} -> {}",
            self.model.history().len() + 1,
            self.difficulty,
            self.model.history(),
            decision
        );
        decision
    }
    /// Takes effect on the next decision; learned state is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn reset_match(&mut self) {
        self.model.reset();
    }
    pub fn model(&self) -> &PatternModel {
        &self.model
    }
}
