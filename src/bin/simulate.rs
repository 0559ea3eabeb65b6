//! Simulate Binary
//!
//! Measures realized computer win rates per difficulty against scripted humans.
//!
//! Options: --rounds, --seed, --strategy, --difficulty, --config

use clap::Parser;
use clap::ValueEnum;
use roshambo::arena;
use roshambo::config::Settings;
use roshambo::engine::Difficulty;
use roshambo::game::Move;
use roshambo::players::Cycler;
use roshambo::players::Fish;
use roshambo::players::Player;
use roshambo::players::Repeater;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// uniformly random moves
    Fish,
    /// Rock, Paper, Scissors, repeated
    Cycle,
    /// Rock every round
    Rock,
}

#[derive(Parser, Debug)]
#[command(about = "Simulate the adaptive opponent against scripted players")]
struct Args {
    #[arg(long, default_value_t = 10_000)]
    rounds: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = Strategy::Cycle)]
    strategy: Strategy,
    /// single tier to simulate; all tiers when omitted
    #[arg(long)]
    difficulty: Option<String>,
    /// JSON settings file, overrides ROSHAMBO_CONFIG
    #[arg(long)]
    config: Option<String>,
}

impl Strategy {
    fn player(&self, seed: u64) -> Box<dyn Player> {
        match self {
            Self::Fish => Box::new(Fish::seeded(seed)),
            Self::Cycle => Box::new(Cycler::default()),
            Self::Rock => Box::new(Repeater(Move::Rock)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    let args = Args::parse();
    let settings = match args.config {
        Some(ref path) => Settings::load(path)?,
        None => Settings::from_env()?,
    };
    let tiers = match args.difficulty {
        Some(ref tier) => vec![Difficulty::try_from(tier.as_str())?],
        None => Difficulty::all().to_vec(),
    };
    for difficulty in tiers {
        let settings = Settings {
            difficulty,
            ..settings.clone()
        };
        let mut player = args.strategy.player(args.seed);
        let report = arena::simulate(player.as_mut(), &settings, args.rounds, args.seed);
        println!("{}", report);
        println!(
            "closed form vs a human repeating one move {:.3}\n",
            arena::expected_win_rate(difficulty, settings.exploration_rate)
        );
    }
    Ok(())
}
