//! CLI commands.

mod arrange;
mod chart;
mod layout;
mod roster;
mod seats;
mod show;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use crate::session::Session;

/// seatctl - assign students to exam seats.
#[derive(Debug, Parser)]
#[command(name = "seatctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Session file to use instead of the default location.
    #[arg(long, global = true, env = "SEATCTL_SESSION")]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the room layout (size, save, load).
    Layout(layout::LayoutCommand),

    /// Enable or disable individual seats.
    Seats(seats::SeatsCommand),

    /// Load a student roster from a delimited file.
    Roster(roster::RosterCommand),

    /// Randomly assign the roster to available seats.
    Arrange,

    /// Clear the current assignment.
    Clear,

    /// Export the seating chart.
    Chart(chart::ChartCommand),

    /// Show the room as a colored grid.
    Show,

    /// Show session status (geometry, disabled, roster, assigned).
    Status,

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        let ctx = CommandContext {
            format,
            session_path: self.session,
        };

        match self.command {
            Commands::Layout(cmd) => cmd.run(ctx),
            Commands::Seats(cmd) => cmd.run(ctx),
            Commands::Roster(cmd) => cmd.run(ctx),
            Commands::Arrange => arrange::arrange(ctx),
            Commands::Clear => arrange::clear(ctx),
            Commands::Chart(cmd) => cmd.run(ctx),
            Commands::Show => show::show(ctx),
            Commands::Status => show::status(ctx),
            Commands::Version => {
                println!("seatctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub session_path: Option<PathBuf>,
}

impl CommandContext {
    /// Open the session this invocation operates on.
    pub fn session(&self) -> Result<Session> {
        Session::open(self.session_path.as_deref())
    }
}
