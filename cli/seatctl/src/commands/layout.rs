//! Layout commands (resize, save, load).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use seatplan_classroom::LayoutSnapshot;

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage the room layout.
#[derive(Debug, Args)]
pub struct LayoutCommand {
    #[command(subcommand)]
    command: LayoutSubcommand,
}

#[derive(Debug, Subcommand)]
enum LayoutSubcommand {
    /// Set the grid size. Clears disabled seats and the assignment.
    Resize {
        /// Rows (1-20).
        rows: u8,
        /// Columns (1-20).
        cols: u8,
    },

    /// Save the layout (geometry + disabled seats) to a JSON file.
    Save {
        /// Destination file.
        path: PathBuf,
    },

    /// Load a layout from a JSON file. Clears the assignment.
    Load {
        /// Source file.
        path: PathBuf,
    },
}

impl LayoutCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            LayoutSubcommand::Resize { rows, cols } => resize(ctx, rows, cols),
            LayoutSubcommand::Save { path } => save(ctx, path),
            LayoutSubcommand::Load { path } => load(ctx, path),
        }
    }
}

fn resize(ctx: CommandContext, rows: u8, cols: u8) -> Result<()> {
    let mut session = ctx.session()?;
    session.room.resize(rows, cols)?;
    session.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(
            &serde_json::json!({ "rows": rows, "cols": cols }),
            ctx.format,
        ),
        OutputFormat::Table => print_success(&format!("Classroom size set to {rows} x {cols}")),
    }
    Ok(())
}

fn save(ctx: CommandContext, path: PathBuf) -> Result<()> {
    let session = ctx.session()?;
    let snapshot = session.room.export_state();
    let contents = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write layout to {:?}", path))?;

    match ctx.format {
        OutputFormat::Json => print_single(&snapshot, ctx.format),
        OutputFormat::Table => {
            print_success(&format!("Classroom configuration saved to {}", path.display()))
        }
    }
    Ok(())
}

fn load(ctx: CommandContext, path: PathBuf) -> Result<()> {
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read layout from {:?}", path))?;
    let snapshot: LayoutSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse layout from {:?}", path))?;

    let mut session = ctx.session()?;
    session.room.import_state(snapshot)?;
    session.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&session.room.export_state(), ctx.format),
        OutputFormat::Table => print_success("Classroom configuration loaded"),
    }
    Ok(())
}
