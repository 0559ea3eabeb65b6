use super::*;
use crate::Probability;
use crate::config::Settings;
use crate::engine::Difficulty;
use crate::engine::Opponent;
use crate::game::Round;
use crate::players::Player;

/// Plays `rounds` rounds of `player` against a seeded opponent.
pub fn simulate<P>(player: &mut P, settings: &Settings, rounds: usize, seed: u64) -> Report
where
    P: Player + ?Sized,
{
    let mut opponent = Opponent::seeded(settings, seed);
    let mut report = Report::new(player.to_string(), settings.difficulty);
    for index in 0..rounds {
        let human = player.decide();
        opponent.record_human_move(human);
        let computer = opponent.select_computer_move();
        let round = Round {
            index,
            human,
            computer,
        };
        report.tally(round.outcome());
        player.notify(&round);
    }
    log::info!(
        "{} rounds vs {} on {}: computer won {:.3} (target {:.3})",
        rounds,
        player,
        settings.difficulty,
        report.computer_win_rate(),
        settings.difficulty.ai_win_rate()
    );
    report
}

/// Long-run computer win rate against a human who repeats one move.
///
/// The opponent selects after the round's human move is recorded, so its
/// prediction is the move after the current one; a repeater makes the two
/// coincide. Explored rounds are a uniform contest worth one third; every
/// other round is won exactly when the contest branch is drawn.
pub fn expected_win_rate(difficulty: Difficulty, exploration: Probability) -> Probability {
    (1. - exploration) * difficulty.ai_win_rate() + exploration / 3.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Move;
    use crate::players::Cycler;
    use crate::players::Fish;
    use crate::players::Repeater;

    const ROUNDS: usize = 2000;
    const TOLERANCE: Probability = 0.07;

    fn settings(difficulty: Difficulty) -> Settings {
        Settings {
            difficulty,
            ..Settings::default()
        }
    }

    #[test]
    fn realized_rate_tracks_target_for_a_repeating_human() {
        for difficulty in Difficulty::all() {
            let expected = expected_win_rate(difficulty, crate::EXPLORATION_RATE);
            for (seed, mv) in [(1, Move::Rock), (2, Move::Scissors)] {
                let report = simulate(&mut Repeater(mv), &settings(difficulty), ROUNDS, seed);
                let realized = report.computer_win_rate();
                assert!(
                    (realized - expected).abs() < TOLERANCE,
                    "{} vs {}: realized {:.3} expected {:.3}",
                    difficulty,
                    mv,
                    realized,
                    expected
                );
            }
        }
    }

    #[test]
    fn computer_wins_are_counted_for_the_computer() {
        let report = simulate(&mut Repeater(Move::Rock), &settings(Difficulty::Hard), ROUNDS, 1);
        assert!(report.computer_win_rate() > 0.5, "{}", report);
        assert!(report.human_win_rate() < 0.2, "{}", report);
        assert!(report.computer_win_rate() > report.human_win_rate());
    }

    #[test]
    fn harder_tiers_win_more_against_a_repeating_human() {
        let rates = Difficulty::all().map(|difficulty| {
            simulate(&mut Repeater(Move::Paper), &settings(difficulty), ROUNDS, 3)
                .computer_win_rate()
        });
        assert!(rates[0] < rates[1] && rates[1] < rates[2], "{:?}", rates);
    }

    #[test]
    fn cycling_human_is_read_one_step_ahead() {
        // the forecast is the cycle's next element, which beats the move in
        // play: contesting it loses and yielding to it draws
        for difficulty in Difficulty::all() {
            let report = simulate(&mut Cycler::default(), &settings(difficulty), ROUNDS, 8);
            let explored = crate::EXPLORATION_RATE / 3.;
            let expected = expected_win_rate(difficulty, crate::EXPLORATION_RATE);
            assert!(
                (report.computer_win_rate() - explored).abs() < TOLERANCE,
                "{}",
                report
            );
            assert!(
                (report.human_win_rate() - expected).abs() < TOLERANCE,
                "{}",
                report
            );
        }
    }

    #[test]
    fn uniform_human_holds_an_even_contest() {
        for difficulty in Difficulty::all() {
            let report = simulate(&mut Fish::seeded(4), &settings(difficulty), ROUNDS, 5);
            let realized = report.computer_win_rate();
            assert!((realized - 1. / 3.).abs() < TOLERANCE, "{}: {:.3}", difficulty, realized);
        }
    }

    #[test]
    fn report_counts_every_round() {
        let report = simulate(&mut Fish::seeded(6), &Settings::default(), 300, 7);
        assert_eq!(report.rounds(), 300);
        let total = report.computer_win_rate() + report.human_win_rate() + report.draw_rate();
        assert!((total - 1.).abs() < 1e-4);
    }

    #[test]
    fn empty_report_has_zero_rates() {
        let report = Report::new(String::from("nobody"), Difficulty::Easy);
        assert_eq!(report.computer_win_rate(), 0.);
        assert_eq!(report.rounds(), 0);
    }
}
