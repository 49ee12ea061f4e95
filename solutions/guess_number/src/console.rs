// Line-based I/O for the game: prompts, input validation and every message
// the player sees. Generic over the streams so tests can script a session.
use std::io::{BufRead, Write};

use log::trace;

use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::{MAX_GUESS, MIN_GUESS, PROMPT};

const BANNER: &str = "\
************************************************************************
*                                                                      *
*                   Welcome to Number Guessing Game!                   *
*                                                                      *
************************************************************************
";

const RULES: &str = "\
- I will think of a number between 1 and 100, and you will have to guess
  it within a limited number of attempts.
- With each failed guess, I will give you feedback on whether the number
  you said is higher or lower than the number I have thought of.
";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn write_line(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    // Show the prompt marker and read one trimmed line.
    // Running out of input is fatal for the session.
    pub fn read_line(&mut self) -> Result<String> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    pub fn show_welcome(&mut self) -> Result<()> {
        self.write_line(BANNER)?;
        self.write_line(RULES)
    }

    pub fn prompt_difficulty(&mut self) -> Result<Difficulty> {
        self.write_line("Select difficulty (easy/medium/hard):")?;

        loop {
            let selection = self.read_line()?;
            match selection.parse::<Difficulty>() {
                Ok(difficulty) => return Ok(difficulty),
                Err(()) => {
                    trace!("rejected difficulty {selection:?}");
                    self.write_line("Invalid difficulty. Please type 'easy', 'medium', or 'hard':")?;
                }
            }
        }
    }

    // Keep asking until the player enters an integer inside the guess range
    pub fn prompt_guess(&mut self) -> Result<u32> {
        loop {
            let input = self.read_line()?;
            match parse_guess(&input) {
                Ok(guess) => return Ok(guess),
                Err(rejection) => {
                    trace!("rejected guess {input:?}");
                    self.write_line(rejection.message())?;
                }
            }
        }
    }

    pub fn ask_to_play_again(&mut self) -> Result<bool> {
        self.write_line("Do you want to play again? (yes/no):")?;

        loop {
            let response = self.read_line()?.to_lowercase();
            match response.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => {
                    trace!("rejected replay answer {response:?}");
                    self.write_line("Invalid response. Please type 'yes' or 'no':")?;
                }
            }
        }
    }

    pub fn show_round_start(&mut self, difficulty: Difficulty) -> Result<()> {
        self.write_line(&format!(
            "Ok, I have already thought of a number between {MIN_GUESS} and {MAX_GUESS}.\n\
             Since you chose the {difficulty} difficulty, you have {} to guess it.\n\
             Enter your guess:",
            attempts_phrase(difficulty.attempts())
        ))
    }

    // Wrapped after "it took" and followed by a blank line
    pub fn show_win(&mut self, secret: u32, attempts_used: u32, elapsed: &str) -> Result<()> {
        self.write_line(&format!(
            "Congratulations! It was {secret}! You guessed it in {}, and it took\nyou {elapsed}.\n",
            attempts_phrase(attempts_used)
        ))
    }

    pub fn show_retry(&mut self, attempts_left: u32) -> Result<()> {
        self.write_line(&format!(
            "You have {} left. Try again:",
            attempts_phrase(attempts_left)
        ))
    }

    pub fn show_game_over(&mut self, secret: u32) -> Result<()> {
        self.write_line(&format!(
            "Sorry, you have run out of attempts. The correct number was {secret}."
        ))
    }

    pub fn show_farewell(&mut self) -> Result<()> {
        self.write_line("Thank you for playing. Bye!")?;
        self.output.flush()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum GuessRejection {
    NotAnInteger,
    OutOfRange,
}

impl GuessRejection {
    fn message(&self) -> &'static str {
        match self {
            GuessRejection::NotAnInteger => "Invalid guess. Please enter a valid integer:",
            GuessRejection::OutOfRange => "Invalid guess. Please enter a number between 1 and 100:",
        }
    }
}

// Values that overflow i32 are reported as not an integer
pub fn parse_guess(input: &str) -> std::result::Result<u32, GuessRejection> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| GuessRejection::NotAnInteger)?;

    u32::try_from(value)
        .ok()
        .filter(|guess| (MIN_GUESS..=MAX_GUESS).contains(guess))
        .ok_or(GuessRejection::OutOfRange)
}

pub fn attempts_phrase(count: u32) -> String {
    if count == 1 {
        format!("{count} attempt")
    } else {
        format!("{count} attempts")
    }
}
