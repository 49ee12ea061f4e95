use std::io::{BufRead, Write};

use log::info;

use crate::console::Console;
use crate::error::Result;
use crate::round::{RoundOutcome, SecretSource, play_round};
use crate::stopwatch::Stopwatch;

// Top-level game: welcome once, rounds until the player says no, farewell.
pub struct Session<R, W, S> {
    console: Console<R, W>,
    source: S,
    stopwatch: Stopwatch,
}

impl<R: BufRead, W: Write, S: SecretSource> Session<R, W, S> {
    pub fn new(console: Console<R, W>, source: S) -> Self {
        Session {
            console,
            source,
            stopwatch: Stopwatch::new(),
        }
    }

    /// Runs the whole session and returns the outcome of every round played.
    ///
    /// The console is dropped when this returns, which releases the input.
    pub fn run(mut self) -> Result<Vec<RoundOutcome>> {
        // Banner and rules are shown once per session
        self.console.show_welcome()?;

        let mut outcomes = Vec::new();
        loop {
            // Difficulty is chosen again for every round
            let difficulty = self.console.prompt_difficulty()?;
            let outcome = play_round(
                &mut self.console,
                &mut self.source,
                &mut self.stopwatch,
                difficulty,
            )?;
            info!("round {} ended: {outcome:?}", outcomes.len() + 1);
            outcomes.push(outcome);

            // Anything but yes/no is re-asked inside the console
            if !self.console.ask_to_play_again()? {
                break;
            }
        }

        // Say goodbye; dropping self releases the input
        self.console.show_farewell()?;
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::round::tests::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run_session<S: SecretSource>(source: S, input: &str) -> (Result<Vec<RoundOutcome>>, String) {
        let mut output = Vec::new();
        let outcomes = Session::new(Console::new(input.as_bytes(), &mut output), source).run();
        (outcomes, String::from_utf8(output).unwrap())
    }

    #[test]
    fn single_round_then_quit() {
        let (outcomes, output) = run_session(Scripted::new(&[50]), "hard\n10\n90\n50\nno\n");

        let outcomes = outcomes.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_won());

        assert!(output.starts_with("************"));
        assert_eq!(output.matches("Welcome to Number Guessing Game!").count(), 1);
        assert!(output.contains("took\nyou less than a second.\n\nDo you want to play again? (yes/no):"));
        assert!(output.ends_with("Thank you for playing. Bye!\n"));
    }

    #[test]
    fn replay_rejects_unknown_answers() {
        let (outcomes, output) = run_session(Scripted::new(&[5]), "easy\n5\nmaybe\nNO\n");

        assert_eq!(outcomes.unwrap().len(), 1);
        assert_eq!(output.matches("Invalid response. Please type 'yes' or 'no':").count(), 1);
    }

    #[test]
    fn yes_starts_fresh_round() {
        let input = "hard\n1\n1\n1\n1\nyes\nmedium\n80\nno\n";
        let (outcomes, output) = run_session(Scripted::new(&[60, 80]), input);

        let outcomes = outcomes.unwrap();
        assert_eq!(
            outcomes,
            vec![
                RoundOutcome::Lost { secret: 60 },
                RoundOutcome::Won {
                    secret: 80,
                    attempts_used: 1,
                    elapsed: "less than a second".to_string(),
                },
            ]
        );
        assert!(output.contains("you have 4 attempts to guess it."));
        assert!(output.contains("you have 6 attempts to guess it."));
        assert_eq!(output.matches("Select difficulty (easy/medium/hard):").count(), 2);
        assert_eq!(output.matches("Welcome to Number Guessing Game!").count(), 1);
    }

    #[test]
    fn invalid_difficulty_is_reprompted() {
        let (outcomes, output) = run_session(Scripted::new(&[3]), "impossible\nHard\n3\nno\n");

        assert_eq!(outcomes.unwrap().len(), 1);
        assert!(output.contains("Invalid difficulty. Please type 'easy', 'medium', or 'hard':"));
        assert!(output.contains("Since you chose the hard difficulty"));
    }

    #[test]
    fn input_closed_before_farewell() {
        let (outcomes, output) = run_session(Scripted::new(&[3]), "easy\n3\n");

        assert!(matches!(outcomes, Err(GameError::InputClosed)));
        assert!(!output.contains("Thank you for playing."));
    }

    #[test]
    fn seeded_rng_plays_every_requested_round() {
        // Leftover guesses after an early win fall through to the replay prompt
        let round = "hard\n0\n101\n".to_string() + &"100\n".repeat(4);
        let mut input = String::new();
        for _ in 0..5 {
            input.push_str(&round);
            input.push_str("yes\n");
        }
        input.push_str("easy\n50\n50\n50\n50\n50\n50\n50\n50\nno\n");

        let (outcomes, _) = run_session(StdRng::seed_from_u64(2024), &input);

        let outcomes = outcomes.unwrap();
        assert_eq!(outcomes.len(), 6);
        for outcome in &outcomes {
            assert!((1..=100).contains(&outcome.secret()));
        }
    }
}
