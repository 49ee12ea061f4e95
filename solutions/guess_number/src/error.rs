// Everything that can stop a game session.
// Bad user input never shows up here; the console re-prompts for it instead.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("input stream closed")]
    InputClosed,
    #[error("stopwatch has not been started")]
    StopwatchNotStarted,
    #[error("round is already over")]
    RoundOver,
    #[error("console I/O error (error: {0})")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
