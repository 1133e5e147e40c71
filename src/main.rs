//! Contact Assistant - Main entry point
//!
//! Reads commands from stdin one line at a time and prints the replies.

use anyhow::{Context, Result};
use contact_assistant::{Assistant, Config, SystemClock};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reported once by anyhow when main returns the error
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so stdout only carries the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        birthday_window_days = config.birthday_window_days,
        "Configuration loaded successfully"
    );

    let mut assistant = Assistant::new(SystemClock).with_birthday_window(config.birthday_window_days);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to the assistant bot!")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("Failed to read input: {}", e);
                return Err(e.into());
            }
            None => {
                // End of input behaves like `exit`
                writeln!(stdout)?;
                writeln!(stdout, "Good bye!")?;
                break;
            }
        };

        let Some(reply) = assistant.handle_line(&line) else {
            continue;
        };

        writeln!(stdout, "{}", reply.text())?;
        if reply.is_exit() {
            break;
        }
    }

    info!(
        contacts = assistant.directory().len(),
        "Contact assistant shutdown complete"
    );
    Ok(())
}
