use std::time::{Duration, Instant};

use log::debug;

use crate::error::{GameError, Result};

/// Measures how long a round takes.
///
/// The stopwatch is empty until [`Stopwatch::start`] is called. Calling
/// `start` again overwrites the previous instant.
#[derive(Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        debug!("stopwatch started");
        self.started_at = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Result<Duration> {
        self.started_at
            .map(|start| start.elapsed())
            .ok_or(GameError::StopwatchNotStarted)
    }

    pub fn formatted_elapsed(&self) -> Result<String> {
        self.elapsed().map(format_duration)
    }
}

/// Renders a duration as "N minute(s) and M second(s)".
///
/// Sub-second parts are dropped; anything under one second reads
/// "less than a second".
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let minutes = total / 60;
    let seconds = total % 60;

    match (minutes, seconds) {
        (0, 0) => "less than a second".to_string(),
        (0, s) => plural(s, "second"),
        (m, 0) => plural(m, "minute"),
        (m, s) => format!("{} and {}", plural(m, "minute"), plural(s, "second")),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
