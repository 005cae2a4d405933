//! Error display for the CLI.

use colored::Colorize;
use seatplan_chart::ChartError;
use seatplan_classroom::ClassroomError;
use seatplan_roster::ImportError;

/// Print an error in a user-friendly format, with a hint where one helps.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{} {}", "Hint:".yellow().bold(), hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(classroom) = err.downcast_ref::<ClassroomError>() {
        return match classroom {
            ClassroomError::SeatAssigned { .. } => {
                Some("Run `seatctl clear` before modifying seats.")
            }
            ClassroomError::EmptyRoster => {
                Some("Run `seatctl roster load <file> --column <name>` first.")
            }
            ClassroomError::CapacityExceeded { .. } => {
                Some("Enable more seats, enlarge the grid, or load a shorter roster.")
            }
            ClassroomError::InvalidGeometry { .. } => {
                Some("Rows and columns must each be between 1 and 20.")
            }
            _ => None,
        };
    }
    if let Some(import) = err.downcast_ref::<ImportError>() {
        return match import {
            ImportError::UnknownColumn { .. } => {
                Some("Run `seatctl roster columns <file>` to list the columns.")
            }
            _ => None,
        };
    }
    if let Some(chart) = err.downcast_ref::<ChartError>() {
        return match chart {
            ChartError::NothingArranged => Some("Run `seatctl arrange` first."),
            ChartError::Write { .. } => None,
        };
    }
    None
}
