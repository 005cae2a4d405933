//! # seatplan-classroom
//!
//! Classroom state for exam seating: grid geometry, disabled seats, the
//! student roster, and the seat→student assignment produced by a uniform
//! random arrangement.
//!
//! ## Invariants
//!
//! - Geometry stays within 1..=20 rows and columns after any successful
//!   resize or snapshot import.
//! - A disabled seat is never assigned; an assigned seat cannot be disabled.
//! - Assigned seats are always a subset of the current geometry minus the
//!   disabled set.
//! - Resizing or importing a layout clears the disabled set and the
//!   assignment so no stale coordinate can outlive its geometry.
//! - Every failing operation leaves the state untouched.
//!
//! The roster and assignment are deliberately absent from [`LayoutSnapshot`]:
//! only the room layout is durable.

mod error;
mod seat;
mod snapshot;
mod state;

pub use error::ClassroomError;
pub use seat::{Seat, SeatParseError};
pub use snapshot::LayoutSnapshot;
pub use state::{Classroom, SeatState};
