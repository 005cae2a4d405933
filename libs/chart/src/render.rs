//! Paginated SVG rendering of a seating chart.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use seatplan_classroom::{Classroom, Seat};
use tracing::debug;

use crate::error::ChartError;
use crate::options::ChartOptions;

const TITLE_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 9.0;
const HEADER_HEIGHT: f32 = 30.0;
const SEAT_GAP: f32 = 5.0;
const MAX_SEAT_WIDTH: f32 = 60.0;
const MAX_SEAT_HEIGHT: f32 = 50.0;
const MIN_SEAT_HEIGHT: f32 = 24.0;

/// One rendered page of the chart.
#[derive(Debug, Clone)]
pub struct ChartPage {
    /// 1-based page number.
    pub number: usize,
    /// Complete standalone SVG document.
    pub svg: String,
}

/// Renders the classroom's current arrangement as one or more pages.
///
/// Fails with [`ChartError::NothingArranged`] when no assignment exists.
/// Rows that do not fit one page at the minimum seat height flow onto
/// subsequent pages; each page repeats the title and front-of-room band.
pub fn render(room: &Classroom, options: &ChartOptions) -> Result<Vec<ChartPage>, ChartError> {
    if room.assignment().is_empty() {
        return Err(ChartError::NothingArranged);
    }

    let grid_top = options.margin + HEADER_HEIGHT + 40.0;
    let grid_height = options.page_height - grid_top - options.margin;
    let rows_per_page = ((grid_height / MIN_SEAT_HEIGHT) as usize).max(1);

    let row_chunks: Vec<Vec<u8>> = (0..room.rows())
        .collect::<Vec<u8>>()
        .chunks(rows_per_page)
        .map(<[u8]>::to_vec)
        .collect();

    let pages: Vec<ChartPage> = row_chunks
        .iter()
        .enumerate()
        .map(|(index, rows)| ChartPage {
            number: index + 1,
            svg: render_page(room, options, rows, grid_top, grid_height),
        })
        .collect();

    debug!(pages = pages.len(), seats = room.assignment().len(), "chart rendered");
    Ok(pages)
}

/// Writes each page as `{stem}.svg` (single page) or `{stem}-{n}.svg`.
pub fn write_pages(
    pages: &[ChartPage],
    dir: impl AsRef<Path>,
    stem: &str,
) -> Result<Vec<PathBuf>, ChartError> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        let name = if pages.len() == 1 {
            format!("{stem}.svg")
        } else {
            format!("{stem}-{}.svg", page.number)
        };
        let path = dir.join(name);
        fs::write(&path, &page.svg).map_err(|source| ChartError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}

fn render_page(
    room: &Classroom,
    options: &ChartOptions,
    rows: &[u8],
    grid_top: f32,
    grid_height: f32,
) -> String {
    let w = options.page_width;
    let h = options.page_height;
    let font = escape(&options.font_family());

    let seat_w = ((w - 2.0 * options.margin) / room.cols() as f32).min(MAX_SEAT_WIDTH);
    let seat_h = (grid_height / rows.len() as f32).min(MAX_SEAT_HEIGHT);
    let start_x = (w - seat_w * room.cols() as f32) / 2.0;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}pt" height="{h}pt" viewBox="0 0 {w} {h}" font-family="{font}">"#
    );
    let _ = write!(svg, r#"<rect width="{w}" height="{h}" fill="white"/>"#);

    // Title
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{y}" font-size="{TITLE_SIZE}" text-anchor="middle">{title}</text>"#,
        x = w / 2.0,
        y = options.margin - 10.0,
        title = escape(&options.title),
    );

    // Front-of-room band, deliberately unlabeled.
    let _ = write!(
        svg,
        r#"<rect x="{x}" y="{y}" width="{bw}" height="{HEADER_HEIGHT}" fill="{fill}" stroke="black" stroke-width="2"/>"#,
        x = options.margin,
        y = options.margin,
        bw = w - 2.0 * options.margin,
        fill = escape(&options.header_fill),
    );

    for (row_index, &row) in rows.iter().enumerate() {
        for col in 0..room.cols() {
            let seat = Seat::new(row, col);
            if room.disabled_seats().contains(&seat) {
                continue;
            }
            let x = start_x + col as f32 * seat_w;
            let y = grid_top + row_index as f32 * seat_h;
            let (class, fill, label) = match room.student_at(seat) {
                Some(student) => ("seat seat-assigned", &options.assigned_fill, student.to_string()),
                None => ("seat seat-available", &options.available_fill, seat.label()),
            };
            let _ = write!(
                svg,
                r#"<rect class="{class}" x="{x}" y="{y}" width="{rw}" height="{rh}" fill="{fill}" stroke="black"/>"#,
                rw = seat_w - SEAT_GAP,
                rh = seat_h - SEAT_GAP,
                fill = escape(fill),
            );
            let _ = write!(
                svg,
                r#"<text x="{tx}" y="{ty}" font-size="{LABEL_SIZE}" text-anchor="middle">{text}</text>"#,
                tx = x + (seat_w - SEAT_GAP) / 2.0,
                ty = y + (seat_h - SEAT_GAP) / 2.0 + LABEL_SIZE / 3.0,
                text = escape(&label),
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Escapes text for use in SVG content and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use seatplan_classroom::Seat;

    use super::*;

    fn arranged_room(rows: u8, cols: u8, disabled: &[(u8, u8)], names: &[&str]) -> Classroom {
        let mut room = Classroom::new();
        room.resize(rows, cols).unwrap();
        for &(r, c) in disabled {
            room.toggle_disabled(Seat::new(r, c)).unwrap();
        }
        room.set_roster(names.iter().map(|s| s.to_string()).collect());
        room.arrange().unwrap();
        room
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn empty_assignment_refuses_to_render() {
        let room = Classroom::new();
        assert!(matches!(
            render(&room, &ChartOptions::default()),
            Err(ChartError::NothingArranged)
        ));
    }

    #[test]
    fn one_rect_per_non_disabled_seat() {
        let room = arranged_room(2, 2, &[(1, 1)], &["Alice", "Bob"]);
        let pages = render(&room, &ChartOptions::default()).unwrap();
        assert_eq!(pages.len(), 1);
        let svg = &pages[0].svg;
        assert_eq!(count(svg, r#"class="seat "#), 3);
        assert_eq!(count(svg, "seat-assigned"), 2);
        assert_eq!(count(svg, "seat-available"), 1);
    }

    #[test]
    fn unassigned_seats_carry_positional_labels() {
        let room = arranged_room(2, 2, &[], &["Alice"]);
        let svg = &render(&room, &ChartOptions::default()).unwrap()[0].svg;
        assert!(svg.contains("Alice"));
        // Three of the four seats are unassigned and keep their labels.
        let labels = ["R1C1", "R1C2", "R2C1", "R2C2"];
        let shown = labels.iter().filter(|l| svg.contains(*l)).count();
        assert_eq!(shown, 3);
    }

    #[test]
    fn student_names_are_escaped() {
        let room = arranged_room(1, 1, &[], &["<Ada & \"Bo\">"]);
        let svg = &render(&room, &ChartOptions::default()).unwrap()[0].svg;
        assert!(svg.contains("&lt;Ada &amp; &quot;Bo&quot;&gt;"));
        assert!(!svg.contains("<Ada"));
    }

    #[test]
    fn front_band_is_unlabeled_and_on_every_page() {
        let options = ChartOptions::default();
        let room = arranged_room(20, 2, &[], &["Alice"]);
        let pages = render(&room, &options).unwrap();
        assert!(pages.len() > 1, "20 rows should paginate");
        for page in &pages {
            assert_eq!(count(&page.svg, &options.header_fill), 1);
            assert!(page.svg.contains("Exam Seating Chart"));
        }
    }

    #[test]
    fn pagination_covers_all_rows_exactly_once() {
        let room = arranged_room(20, 3, &[], &["Alice", "Bob"]);
        let pages = render(&room, &ChartOptions::default()).unwrap();
        let total: usize = pages
            .iter()
            .map(|p| count(&p.svg, r#"class="seat "#))
            .sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn write_pages_names_files_by_page_count() {
        let dir = tempfile::tempdir().unwrap();

        let single = arranged_room(2, 2, &[], &["Alice"]);
        let pages = render(&single, &ChartOptions::default()).unwrap();
        let written = write_pages(&pages, dir.path(), "seating-chart").unwrap();
        assert_eq!(written.len(), 1);
        assert!(dir.path().join("seating-chart.svg").is_file());

        let tall = arranged_room(20, 2, &[], &["Alice"]);
        let pages = render(&tall, &ChartOptions::default()).unwrap();
        let written = write_pages(&pages, dir.path(), "seating-chart").unwrap();
        assert!(written.len() > 1);
        assert!(dir.path().join("seating-chart-1.svg").is_file());
        assert!(dir.path().join("seating-chart-2.svg").is_file());
    }
}
