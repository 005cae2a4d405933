//! Display commands (show, status).

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, render_grid, OutputFormat};

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct StatusView {
    rows: u8,
    cols: u8,
    disabled: usize,
    students: usize,
    assigned: usize,
}

/// Print the room as a colored terminal grid.
pub fn show(ctx: CommandContext) -> Result<()> {
    let session = ctx.session()?;
    match ctx.format {
        OutputFormat::Json => {
            let room = &session.room;
            print_single(
                &serde_json::json!({
                    "rows": room.rows(),
                    "cols": room.cols(),
                    "disabled_seats": room.disabled_seats(),
                    "assignment": room.assignment(),
                }),
                ctx.format,
            );
        }
        OutputFormat::Table => println!("{}", render_grid(&session.room)),
    }
    Ok(())
}

/// Print session counters.
pub fn status(ctx: CommandContext) -> Result<()> {
    let session = ctx.session()?;
    let room = &session.room;
    let view = StatusView {
        rows: room.rows(),
        cols: room.cols(),
        disabled: room.disabled_seats().len(),
        students: room.roster().len(),
        assigned: room.assignment().len(),
    };
    print_output(&[view], ctx.format);
    Ok(())
}
