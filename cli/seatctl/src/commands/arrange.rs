//! Arrangement commands (arrange, clear).

use anyhow::Result;

use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Shuffle the roster onto the available seats.
pub fn arrange(ctx: CommandContext) -> Result<()> {
    let mut session = ctx.session()?;
    session.room.arrange()?;
    session.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(session.room.assignment(), ctx.format),
        OutputFormat::Table => print_success(&format!(
            "Seating arrangement completed ({} students)",
            session.room.assignment().len()
        )),
    }
    Ok(())
}

/// Drop the current assignment. Idempotent.
pub fn clear(ctx: CommandContext) -> Result<()> {
    let mut session = ctx.session()?;
    let had_assignment = !session.room.assignment().is_empty();
    session.room.clear_assignment();
    session.save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "cleared": true }), ctx.format),
        OutputFormat::Table if had_assignment => print_success("Arrangement cleared"),
        OutputFormat::Table => print_info("No arrangement to clear"),
    }
    Ok(())
}
