use crate::engine::Difficulty;
use crate::game::Match;
use crate::game::Move;
use dialoguer::Confirm;
use dialoguer::Select;

/// Interactive player reading choices from the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    const QUIT: &'static str = "Quit";

    /// Prompts for a move; `None` when the player chooses to quit.
    pub fn choose(&self, game: &Match) -> anyhow::Result<Option<Move>> {
        let labels = Move::all()
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(String::from(Self::QUIT)))
            .collect::<Vec<_>>();
        let selection = Select::new()
            .with_prompt(format!(
                "Round {} of {} ({})",
                game.score().played() + 1,
                game.rounds(),
                game.difficulty()
            ))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Move::all().get(selection).copied())
    }

    pub fn difficulty(&self, current: Difficulty) -> anyhow::Result<Difficulty> {
        let tiers = Difficulty::all();
        let labels = tiers.iter().map(ToString::to_string).collect::<Vec<_>>();
        let selection = Select::new()
            .with_prompt("Difficulty")
            .items(&labels)
            .default(current as usize)
            .interact()?;
        Difficulty::try_from(selection as u8)
    }

    pub fn rematch(&self) -> anyhow::Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?)
    }
}
