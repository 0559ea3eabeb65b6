use crate::game::Move;

/// The ordered `k` most recent human moves, used as a lookup key.
///
/// Never stored on its own; always recomputed from a [`super::MoveHistory`].
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Signature(Vec<Move>);

impl Signature {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
}

impl From<&[Move]> for Signature {
    fn from(moves: &[Move]) -> Self {
        Self(moves.to_vec())
    }
}

impl TryFrom<&str> for Signature {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .map(|c| Move::try_from(c.to_string().as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.letter()))
    }
}
