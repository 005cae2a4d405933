//! Error types for classroom state operations.

use thiserror::Error;

use crate::seat::Seat;

/// Errors raised by classroom state mutations.
///
/// Every variant is recoverable: the operation that raised it left the
/// state unchanged, and the condition is fixed by operator action (adjust
/// the geometry, free seats, reload the roster) followed by re-invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassroomError {
    /// Requested geometry is outside the supported 1..=20 range.
    #[error("rows and columns must be between 1 and 20, got {rows}x{cols}")]
    InvalidGeometry { rows: u8, cols: u8 },

    /// Seat lies outside the current geometry.
    #[error("seat {seat} is outside the {rows}x{cols} grid")]
    OutOfBounds { seat: Seat, rows: u8, cols: u8 },

    /// Seat currently has a student assigned; clear the arrangement first.
    #[error("seat {seat} is assigned; clear the arrangement before modifying seats")]
    SeatAssigned { seat: Seat },

    /// No students loaded, nothing to arrange.
    #[error("roster is empty; load a student list first")]
    EmptyRoster,

    /// More students than available seats.
    #[error("number of students ({students}) exceeds available seats ({seats})")]
    CapacityExceeded { students: usize, seats: usize },

    /// A persisted layout failed validation.
    #[error("invalid layout snapshot: {message}")]
    InvalidSnapshot { message: String },
}

impl ClassroomError {
    /// Returns true if the error means the arrangement must be cleared first.
    pub fn needs_clear(&self) -> bool {
        matches!(self, ClassroomError::SeatAssigned { .. })
    }

    /// Returns true if the error is a capacity problem (too many students).
    pub fn is_capacity(&self) -> bool {
        matches!(self, ClassroomError::CapacityExceeded { .. })
    }
}
