use crate::game::Move;

/// Ordered, append-only log of the human's moves within one match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory(Vec<Move>);

impl MoveHistory {
    pub fn record(&mut self, mv: Move) {
        self.0.push(mv);
    }
    pub fn reset(&mut self) {
        self.0.clear();
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Last `k` moves in chronological order, or `None` if fewer exist.
    pub fn recent(&self, k: usize) -> Option<&[Move]> {
        self.0.len().checked_sub(k).map(|start| &self.0[start..])
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    pub fn last(&self) -> Option<Move> {
        self.0.last().copied()
    }
}

impl From<Vec<Move>> for MoveHistory {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl std::fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.letter()))
    }
}
