// Number guessing game: the player has a difficulty-limited number of
// attempts to find a secret number between MIN_GUESS and MAX_GUESS.
pub mod console;
pub mod difficulty;
pub mod error;
pub mod round;
pub mod session;
pub mod stopwatch;

pub use console::Console;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use round::{RoundOutcome, SecretSource, play_round};
pub use session::Session;
pub use stopwatch::{Stopwatch, format_duration};

// Inclusive range the secret number is drawn from
pub const MIN_GUESS: u32 = 1;
pub const MAX_GUESS: u32 = 100;

// Printed before every line of input is read
pub const PROMPT: &str = "> ";
