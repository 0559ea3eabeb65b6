use crate::Probability;
use crate::Weight;
use crate::engine::Difficulty;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Tunables for the opponent engine and the match format.
///
/// Every field is optional in the JSON file; missing fields take the
/// crate-level defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pattern_length: usize,
    pub decay_factor: Weight,
    pub exploration_rate: Probability,
    pub difficulty: Difficulty,
    pub rounds: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pattern_length: crate::PATTERN_LENGTH,
            decay_factor: crate::DECAY_FACTOR,
            exploration_rate: crate::EXPLORATION_RATE,
            difficulty: Difficulty::default(),
            rounds: crate::DEFAULT_ROUNDS,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings = Self::parse(&text)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let settings = serde_json::from_str::<Self>(text)?;
        settings.validate()?;
        Ok(settings)
    }
    /// Settings from the file named by [`crate::CONFIG_ENV`], else defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(crate::CONFIG_ENV) {
            Ok(path) => Self::load(path),
            Err(_) => Ok(Self::default()),
        }
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.pattern_length == 0 {
            anyhow::bail!("pattern_length must be at least 1");
        }
        if !(self.decay_factor > 0. && self.decay_factor <= 1.) {
            anyhow::bail!("decay_factor {} outside (0, 1]", self.decay_factor);
        }
        if !(0. ..=1.).contains(&self.exploration_rate) {
            anyhow::bail!("exploration_rate {} outside [0, 1]", self.exploration_rate);
        }
        if !(1..=crate::MAX_ROUNDS).contains(&self.rounds) {
            anyhow::bail!("rounds {} outside 1..={}", self.rounds, crate::MAX_ROUNDS);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.pattern_length, 3);
        assert_eq!(settings.rounds, 3);
        assert_eq!(settings.difficulty, Difficulty::Medium);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings = Settings::parse(r#"{ "difficulty": "HARD", "rounds": 5 }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.rounds, 5);
        assert_eq!(settings.decay_factor, crate::DECAY_FACTOR);
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(Settings::parse(r#"{ "difficulty": "INSANE" }"#).is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        for json in [
            r#"{ "pattern_length": 0 }"#,
            r#"{ "decay_factor": 0.0 }"#,
            r#"{ "decay_factor": 1.5 }"#,
            r#"{ "exploration_rate": -0.1 }"#,
            r#"{ "rounds": 0 }"#,
            r#"{ "rounds": 1000 }"#,
        ] {
            assert!(Settings::parse(json).is_err(), "{}", json);
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load("definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.json"));
        assert!(err.root_cause().is::<std::io::Error>());
    }
}
