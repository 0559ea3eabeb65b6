use super::*;

/// Always throws the same move.
#[derive(Debug, Clone, Copy)]
pub struct Repeater(pub Move);

impl Player for Repeater {
    fn decide(&mut self) -> Move {
        self.0
    }
}

impl std::fmt::Display for Repeater {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Repeater({})", self.0)
    }
}
