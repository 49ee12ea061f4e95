use std::io;

use anyhow::Context;
use guess_number::{Console, Session};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay off unless RUST_LOG is set
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    let outcomes = Session::new(console, rand::thread_rng())
        .run()
        .context("game session ended unexpectedly")?;

    log::info!("played {} round(s)", outcomes.len());
    Ok(())
}
