//! Output formatting for CLI commands.

use colored::{ColoredString, Colorize};
use seatplan_classroom::{Classroom, Seat, SeatState};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => print_single(&data, format),
    }
}

/// Print a single item as JSON (both formats; table output has no richer
/// rendering for ad-hoc values).
pub fn print_single<T: Serialize>(data: &T, _format: OutputFormat) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

/// Cell text width in the terminal grid.
const CELL: usize = 10;

/// Render the room as a colored terminal grid with a legend.
///
/// Each cell shows the assigned student (truncated) or the seat's
/// positional label; background color encodes the seat state.
pub fn render_grid(room: &Classroom) -> String {
    // Each row is `cols` cells of CELL characters joined by single spaces.
    let grid_width = room.cols() as usize * CELL + room.cols() as usize - 1;
    let mut lines = Vec::new();
    let front = format!("{:^width$}", "front of room", width = grid_width);
    lines.push(front.as_str().dimmed().to_string());

    for row in 0..room.rows() {
        let mut cells = Vec::new();
        for col in 0..room.cols() {
            let seat = Seat::new(row, col);
            let text = match room.student_at(seat) {
                Some(student) => truncate(student),
                None => seat.label(),
            };
            cells.push(paint(room.seat_state(seat), &format!("{:^width$}", text, width = CELL)).to_string());
        }
        lines.push(cells.join(" "));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} available  {} disabled  {} assigned",
        paint(SeatState::Available, "  "),
        paint(SeatState::Disabled, "  "),
        paint(SeatState::Assigned, "  "),
    ));
    lines.join("\n")
}

fn paint(state: SeatState, text: &str) -> ColoredString {
    match state {
        SeatState::Available => text.black().on_green(),
        SeatState::Disabled => text.white().on_red(),
        SeatState::Assigned => text.black().on_blue(),
    }
}

fn truncate(name: &str) -> String {
    if name.chars().count() <= CELL {
        name.to_string()
    } else {
        name.chars().take(CELL - 1).chain(std::iter::once('…')).collect()
    }
}
