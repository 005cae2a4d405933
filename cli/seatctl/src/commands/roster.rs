//! Roster commands (list columns, load a name column).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use seatplan_roster::RosterTable;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Load a student roster from a delimited file.
#[derive(Debug, Args)]
pub struct RosterCommand {
    #[command(subcommand)]
    command: RosterSubcommand,
}

#[derive(Debug, Subcommand)]
enum RosterSubcommand {
    /// List the columns of a roster file.
    Columns {
        /// Roster file (CSV; UTF-8 or Big5).
        file: PathBuf,
    },

    /// Load one column of a roster file as the student list.
    Load {
        /// Roster file (CSV; UTF-8 or Big5).
        file: PathBuf,

        /// Column holding student names.
        #[arg(long)]
        column: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct ColumnRow {
    column: String,
}

impl RosterCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            RosterSubcommand::Columns { file } => columns(ctx, file),
            RosterSubcommand::Load { file, column } => load(ctx, file, column),
        }
    }
}

fn columns(ctx: CommandContext, file: PathBuf) -> Result<()> {
    let table = RosterTable::read_path(&file)?;
    let rows: Vec<ColumnRow> = table
        .headers()
        .iter()
        .map(|h| ColumnRow { column: h.clone() })
        .collect();
    print_output(&rows, ctx.format);
    Ok(())
}

fn load(ctx: CommandContext, file: PathBuf, column: String) -> Result<()> {
    let table = RosterTable::read_path(&file)?;
    let names = table.column(&column)?;
    let count = names.len();

    let mut session = ctx.session()?;
    session.room.set_roster(names);
    session.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(
            &serde_json::json!({ "students": count, "column": column }),
            ctx.format,
        ),
        OutputFormat::Table => print_success(&format!("Successfully loaded {count} students")),
    }
    Ok(())
}
