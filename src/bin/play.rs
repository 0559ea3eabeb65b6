//! Play Binary
//!
//! Best-of-N match against the adaptive computer opponent in the terminal.
//!
//! Options: --difficulty, --rounds, --config

use clap::Parser;
use colored::Colorize;
use roshambo::config::Settings;
use roshambo::engine::Difficulty;
use roshambo::game::Match;
use roshambo::game::Outcome;
use roshambo::players::Human;

#[derive(Parser, Debug)]
#[command(about = "Play Rock-Paper-Scissors against an adaptive opponent")]
struct Args {
    /// easy, medium or hard; asked interactively when omitted
    #[arg(long)]
    difficulty: Option<String>,
    /// rounds per match
    #[arg(long)]
    rounds: Option<usize>,
    /// JSON settings file, overrides ROSHAMBO_CONFIG
    #[arg(long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    let args = Args::parse();
    let mut settings = match args.config {
        Some(ref path) => Settings::load(path)?,
        None => Settings::from_env()?,
    };
    if let Some(rounds) = args.rounds {
        settings.rounds = rounds;
    }
    let human = Human;
    settings.difficulty = match args.difficulty {
        Some(ref tier) => Difficulty::try_from(tier.as_str())?,
        None => human.difficulty(settings.difficulty)?,
    };
    settings.validate()?;
    let mut game = Match::from(&settings);
    loop {
        while !game.is_over() {
            let Some(mv) = human.choose(&game)? else {
                log::warn!("player quit mid-match at {}", game.score());
                return Ok(());
            };
            let round = game.play(mv)?;
            let line = round.to_string();
            match round.outcome() {
                Outcome::Win => println!("{}", line.green()),
                Outcome::Loss => println!("{}", line.red()),
                Outcome::Draw => println!("{}", line.yellow()),
            }
        }
        let banner = match game.winner() {
            Some(Outcome::Win) => "VICTORY".green().bold(),
            Some(Outcome::Loss) => "DEFEAT".red().bold(),
            _ => "DRAW".yellow().bold(),
        };
        println!("{}  {}", banner, game.score());
        if !human.rematch()? {
            return Ok(());
        }
        game.set_difficulty(human.difficulty(game.difficulty())?);
    }
}
