//! Sequential pattern learning over the human's move history.
//!
//! The model links each human move to the signature of the `k` moves that
//! preceded it, keeping exponentially decayed weights per link. Prediction
//! rescans the history for earlier occurrences of the current signature and
//! lets each occurrence vote for its follower, scaled by that follower's
//! learned weight.
use super::*;
use crate::Weight;
use crate::game::Move;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct PatternModel {
    k: usize,
    history: MoveHistory,
    weights: TransitionWeights,
}

impl Default for PatternModel {
    fn default() -> Self {
        Self::new(crate::PATTERN_LENGTH, crate::DECAY_FACTOR)
    }
}

impl PatternModel {
    pub fn new(k: usize, decay: Weight) -> Self {
        Self {
            k,
            history: MoveHistory::default(),
            weights: TransitionWeights::new(decay),
        }
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
    pub fn weights(&self) -> &TransitionWeights {
        &self.weights
    }
    /// Signature formed by the last `k` moves, if that many exist.
    pub fn signature(&self) -> Option<Signature> {
        self.history.recent(self.k).map(Signature::from)
    }

    /// Appends a completed human move, linking it to the signature that
    /// immediately preceded it once `k` earlier moves exist.
    pub fn observe(&mut self, mv: Move) {
        if let Some(signature) = self.signature() {
            self.weights.learn(signature, mv);
        }
        self.history.record(mv);
    }

    pub fn predict<C>(&self, chance: &mut C) -> Prediction
    where
        C: Chance + ?Sized,
    {
        match self.signature() {
            None => Prediction::Unavailable,
            Some(signature) => match self.vote(&signature) {
                Some(mv) => Prediction::Learned(mv),
                None => Prediction::Guess(chance.uniform()),
            },
        }
    }

    /// Heaviest follower across earlier occurrences of `signature`.
    /// Ties resolve to the earliest move in declaration order.
    fn vote(&self, signature: &Signature) -> Option<Move> {
        let mut tally = BTreeMap::<Move, Weight>::new();
        for window in self.history.moves().windows(self.k + 1) {
            let (prefix, next) = window.split_at(self.k);
            if prefix == signature.moves() {
                let next = next[0];
                *tally.entry(next).or_default() += self
                    .weights
                    .weight(signature, &next)
                    .unwrap_or(crate::NEUTRAL_WEIGHT);
            }
        }
        tally
            .into_iter()
            .fold(None, |best, (mv, weight)| match best {
                Some((_, top)) if top >= weight => best,
                _ => Some((mv, weight)),
            })
            .map(|(mv, _)| mv)
    }

    pub fn reset(&mut self) {
        self.history.reset();
        self.weights.clear();
    }
}
