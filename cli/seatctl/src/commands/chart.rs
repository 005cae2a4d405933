//! Chart export command.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use seatplan_chart::{render, write_pages, ChartOptions};

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Export the seating chart.
#[derive(Debug, Args)]
pub struct ChartCommand {
    #[command(subcommand)]
    command: ChartSubcommand,
}

#[derive(Debug, Subcommand)]
enum ChartSubcommand {
    /// Render the current arrangement to SVG pages.
    Export {
        /// Output directory.
        #[arg(default_value = ".")]
        out_dir: PathBuf,

        /// Chart title.
        #[arg(long)]
        title: Option<String>,

        /// Preferred font family; repeat for a fallback chain. A generic
        /// family is always appended.
        #[arg(long = "font")]
        fonts: Vec<String>,
    },
}

impl ChartCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ChartSubcommand::Export {
                out_dir,
                title,
                fonts,
            } => export(ctx, out_dir, title, fonts),
        }
    }
}

fn export(
    ctx: CommandContext,
    out_dir: PathBuf,
    title: Option<String>,
    fonts: Vec<String>,
) -> Result<()> {
    let session = ctx.session()?;

    let mut options = ChartOptions::default();
    if let Some(title) = title {
        options.title = title;
    }
    if !fonts.is_empty() {
        options.font_stack = fonts;
    }

    let pages = render(&session.room, &options)?;
    let written = write_pages(&pages, &out_dir, "seating-chart")?;

    match ctx.format {
        OutputFormat::Json => print_single(
            &serde_json::json!({
                "pages": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            }),
            ctx.format,
        ),
        OutputFormat::Table => {
            for path in &written {
                print_success(&format!("Seating chart exported to {}", path.display()));
            }
        }
    }
    Ok(())
}
