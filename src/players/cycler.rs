use super::*;

/// Throws a fixed sequence over and over.
#[derive(Debug, Clone)]
pub struct Cycler {
    sequence: Vec<Move>,
    cursor: usize,
}

impl Cycler {
    pub fn new(sequence: Vec<Move>) -> anyhow::Result<Self> {
        if sequence.is_empty() {
            anyhow::bail!("cycle needs at least one move");
        }
        Ok(Self {
            sequence,
            cursor: 0,
        })
    }
    pub fn period(&self) -> usize {
        self.sequence.len()
    }
}

impl Default for Cycler {
    /// Rock, Paper, Scissors, Rock, ...
    fn default() -> Self {
        Self {
            sequence: Move::all().to_vec(),
            cursor: 0,
        }
    }
}

impl Player for Cycler {
    fn decide(&mut self) -> Move {
        let mv = self.sequence[self.cursor];
        self.cursor = (self.cursor + 1) % self.sequence.len();
        mv
    }
}

impl std::fmt::Display for Cycler {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Cycler(")?;
        self.sequence
            .iter()
            .try_for_each(|m| write!(f, "{}", m.letter()))?;
        write!(f, ")")
    }
}
