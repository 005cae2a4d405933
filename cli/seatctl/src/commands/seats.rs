//! Seat commands (toggle disabled).

use anyhow::Result;
use clap::{Args, Subcommand};
use seatplan_classroom::Seat;

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Enable or disable individual seats.
#[derive(Debug, Args)]
pub struct SeatsCommand {
    #[command(subcommand)]
    command: SeatsSubcommand,
}

#[derive(Debug, Subcommand)]
enum SeatsSubcommand {
    /// Toggle whether a seat is disabled. Rejected while the seat is
    /// assigned; clear the arrangement first.
    Toggle {
        /// Row, 0-indexed.
        row: u8,
        /// Column, 0-indexed.
        col: u8,
    },
}

impl SeatsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            SeatsSubcommand::Toggle { row, col } => toggle(ctx, Seat::new(row, col)),
        }
    }
}

fn toggle(ctx: CommandContext, seat: Seat) -> Result<()> {
    let mut session = ctx.session()?;
    let disabled = session.room.toggle_disabled(seat)?;
    session.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(
            &serde_json::json!({ "seat": seat, "disabled": disabled }),
            ctx.format,
        ),
        OutputFormat::Table => {
            let state = if disabled { "disabled" } else { "enabled" };
            print_success(&format!("Seat {} is now {state}", seat.label()));
        }
    }
    Ok(())
}
