use super::*;
use crate::Weight;
use crate::game::Move;
use std::collections::BTreeMap;

/// Exponentially decayed counts of which move followed each signature.
///
/// A signature with no observed followers is absent rather than zeroed,
/// and every stored weight is non-negative; a follower that keeps
/// decaying without credit shrinks toward zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionWeights {
    decay: Weight,
    table: BTreeMap<Signature, BTreeMap<Move, Weight>>,
}

impl Default for TransitionWeights {
    fn default() -> Self {
        Self::new(crate::DECAY_FACTOR)
    }
}

impl TransitionWeights {
    pub fn new(decay: Weight) -> Self {
        Self {
            decay,
            table: BTreeMap::new(),
        }
    }
    pub fn decay(&self) -> Weight {
        self.decay
    }
    /// Decays every follower of `signature`, then credits `next` with one.
    pub fn learn(&mut self, signature: Signature, next: Move) {
        let followers = self.table.entry(signature).or_default();
        followers.values_mut().for_each(|w| *w *= self.decay);
        *followers.entry(next).or_insert(0.) += 1.;
    }
    /// Pure form of [`Self::learn`].
    pub fn updated(&self, signature: Signature, next: Move) -> Self {
        let mut weights = self.clone();
        weights.learn(signature, next);
        weights
    }
    pub fn weight(&self, signature: &Signature, mv: &Move) -> Option<Weight> {
        self.table
            .get(signature)
            .and_then(|followers| followers.get(mv))
            .copied()
    }
    pub fn followers(&self, signature: &Signature) -> Option<&BTreeMap<Move, Weight>> {
        self.table.get(signature)
    }
    /// Number of distinct signatures with at least one follower.
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

#[rustfmt::skip]
impl std::fmt::Display for TransitionWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌───────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Signature │ Follower │   Weight │")?;
        writeln!(f, "├───────────┼──────────┼──────────┤")?;
        for (signature, followers) in &self.table {
            for (mv, weight) in followers {
                writeln!(f, "│ {:>9} │ {:>8} │ {:>8.3} │", signature.to_string(), mv.to_string(), weight)?;
            }
        }
        writeln!(f, "└───────────┴──────────┴──────────┘")?;
        Ok(())
    }
}
