//! seatctl - operator CLI for exam seating
//!
//! Each invocation loads the saved session, performs one classroom-state
//! operation, saves the session back, and prints the result. Consecutive
//! invocations therefore behave like one interactive editing session.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod output;
mod session;

use commands::Cli;

fn main() {
    // Logs go to stderr so command output stays clean; off unless asked for.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }
}
