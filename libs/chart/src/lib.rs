//! # seatplan-chart
//!
//! Turns a finalized seat assignment into a paginated, print-ready chart:
//! one SVG document per A4-landscape page, a header band for the front of
//! the room, and one color-coded rectangle per non-disabled seat labeled
//! with the assigned student or the seat's positional label.
//!
//! Disabled seats are omitted entirely. Rendering without an arrangement
//! is an error the caller surfaces without aborting anything.

mod error;
mod options;
mod render;

pub use error::ChartError;
pub use options::ChartOptions;
pub use render::{render, write_pages, ChartPage};
