use std::cmp::Ordering;
use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::console::Console;
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use crate::stopwatch::Stopwatch;
use crate::{MAX_GUESS, MIN_GUESS};

/// Source of secret numbers, drawn uniformly from an inclusive range.
///
/// Every `rand::Rng` is a source, so the binary passes the thread RNG and
/// tests pass a seeded `StdRng` or a scripted sequence.
pub trait SecretSource {
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> SecretSource for R {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    TooHigh,
    TooLow,
    Correct,
}

impl Verdict {
    pub fn judge(guess: u32, secret: u32) -> Verdict {
        match guess.cmp(&secret) {
            Ordering::Greater => Verdict::TooHigh,
            Ordering::Less => Verdict::TooLow,
            Ordering::Equal => Verdict::Correct,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Won {
        secret: u32,
        attempts_used: u32,
        elapsed: String,
    },
    Lost {
        secret: u32,
    },
}

impl RoundOutcome {
    pub fn secret(&self) -> u32 {
        match self {
            RoundOutcome::Won { secret, .. } | RoundOutcome::Lost { secret } => *secret,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }
}

// Counters for one round. Only validated guesses reach `guess`.
#[derive(Debug)]
pub struct RoundState {
    secret: u32,
    attempts_left: u32,
    attempts_used: u32,
    status: RoundStatus,
}

impl RoundState {
    pub fn new(secret: u32, difficulty: Difficulty) -> Self {
        RoundState {
            secret,
            attempts_left: difficulty.attempts(),
            attempts_used: 0,
            status: RoundStatus::InProgress,
        }
    }

    pub fn guess(&mut self, guess: u32) -> Result<Verdict> {
        if self.status != RoundStatus::InProgress {
            return Err(GameError::RoundOver);
        }

        // Every validated guess spends one attempt, the winning one included
        self.attempts_used += 1;
        self.attempts_left -= 1;
        let verdict = Verdict::judge(guess, self.secret);

        if verdict == Verdict::Correct {
            self.status = RoundStatus::Won;
        } else if self.attempts_left == 0 {
            self.status = RoundStatus::Lost;
        }

        Ok(verdict)
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }
}

/// Plays one round at the given difficulty and reports how it ended.
///
/// The stopwatch is restarted before the first guess is read, so reading
/// it on a win cannot fail.
pub fn play_round<R, W, S>(
    console: &mut Console<R, W>,
    source: &mut S,
    stopwatch: &mut Stopwatch,
    difficulty: Difficulty,
) -> Result<RoundOutcome>
where
    R: BufRead,
    W: Write,
    S: SecretSource + ?Sized,
{
    // Pick the secret for this round only
    let secret = source.draw(MIN_GUESS, MAX_GUESS);
    debug!("drew secret {secret}");

    // Fresh counters and a restarted clock
    let mut round = RoundState::new(secret, difficulty);
    stopwatch.start();
    info!("round started on {difficulty} with {} attempts", difficulty.attempts());

    console.show_round_start(difficulty)?;

    loop {
        // Invalid input is handled inside the console and never reaches the counters
        let guess = console.prompt_guess()?;
        let verdict = round.guess(guess)?;
        debug!("guess {guess} judged {verdict:?}");

        match verdict {
            // Win: report the time and stop
            Verdict::Correct => {
                let elapsed = stopwatch.formatted_elapsed()?;
                console.show_win(secret, round.attempts_used(), &elapsed)?;
                return Ok(RoundOutcome::Won {
                    secret,
                    attempts_used: round.attempts_used(),
                    elapsed,
                });
            }
            Verdict::TooHigh => console.write_line("Too high!")?,
            Verdict::TooLow => console.write_line("Too low!")?,
        }

        // Out of attempts: reveal the secret
        if round.status() == RoundStatus::Lost {
            console.show_game_over(secret)?;
            return Ok(RoundOutcome::Lost { secret });
        }

        console.show_retry(round.attempts_left())?;
    }
}
