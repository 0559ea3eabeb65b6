//! Adaptive Rock-Paper-Scissors opponent.
//!
//! The crate learns a human player's sequential tendencies over a single
//! match and deliberately biases its own moves so that the computer wins
//! at a target rate that depends on the selected difficulty tier.
//!
//! ## Module Organization
//!
//! - [`game`] — Moves, round outcomes, scoreboard and best-of-N matches
//! - [`engine`] — History, pattern prediction, difficulty policy, selection
//! - [`config`] — JSON-backed tunables for the engine and the match
//! - [`players`] — Human and scripted players that drive a match
//! - [`arena`] — Headless simulation for measuring realized win rates
pub mod arena;
pub mod config;
pub mod engine;
pub mod game;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates, exploration rates and uniform draws.
pub type Probability = f32;
/// Accumulated, exponentially decayed transition weights.
pub type Weight = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PATTERN MODEL
// ============================================================================
/// Number of most recent human moves that form a signature.
pub const PATTERN_LENGTH: usize = 3;
/// Multiplier applied to a signature's existing weights before each update.
pub const DECAY_FACTOR: Weight = 0.9;
/// Weight credited to a follower whose signature has no recorded weight.
pub const NEUTRAL_WEIGHT: Weight = 1.0;

// ============================================================================
// DIFFICULTY POLICY
// Target probability that the computer ends a round as winner.
// ============================================================================
/// Easy tier: the human should win most rounds.
pub const EASY_AI_WIN_RATE: Probability = 0.35;
/// Medium tier: slightly favours the computer.
pub const MEDIUM_AI_WIN_RATE: Probability = 0.55;
/// Hard tier: the computer should win three rounds in four.
pub const HARD_AI_WIN_RATE: Probability = 0.75;
/// Probability of ignoring the prediction entirely, for every tier.
pub const EXPLORATION_RATE: Probability = 0.20;

// ============================================================================
// MATCH FORMAT
// ============================================================================
/// Rounds in a match unless configured otherwise.
pub const DEFAULT_ROUNDS: usize = 3;
/// Upper bound on configurable match length.
pub const MAX_ROUNDS: usize = 99;
/// Environment variable naming an optional settings file.
pub const CONFIG_ENV: &str = "ROSHAMBO_CONFIG";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
