//! The classroom state and its mutation operations.

use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClassroomError;
use crate::seat::Seat;
use crate::snapshot::LayoutSnapshot;

/// Largest supported grid dimension, per side.
pub const MAX_DIM: u8 = 20;

const DEFAULT_ROWS: u8 = 6;
const DEFAULT_COLS: u8 = 8;

/// What a single seat currently is, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatState {
    /// In the grid, not disabled, no student assigned.
    Available,
    /// Excluded from arrangement.
    Disabled,
    /// Has a student assigned by the last arrangement.
    Assigned,
}

/// Single source of truth for geometry, disabled seats, roster, and the
/// seat→student assignment.
///
/// All mutations validate first and only then touch state, so a failed
/// operation never leaves a partial change behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    rows: u8,
    cols: u8,
    disabled: BTreeSet<Seat>,
    roster: Vec<String>,
    assignment: BTreeMap<Seat, String>,
}

impl Default for Classroom {
    /// A 6×8 room with nothing disabled, no roster, no assignment.
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            disabled: BTreeSet::new(),
            roster: Vec::new(),
            assignment: BTreeMap::new(),
        }
    }
}

impl Classroom {
    /// Creates a classroom with the default geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// The currently disabled seats.
    #[must_use]
    pub fn disabled_seats(&self) -> &BTreeSet<Seat> {
        &self.disabled
    }

    /// The loaded roster, in import order.
    #[must_use]
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// The current seat→student assignment.
    #[must_use]
    pub fn assignment(&self) -> &BTreeMap<Seat, String> {
        &self.assignment
    }

    /// The student assigned to `seat`, if any.
    #[must_use]
    pub fn student_at(&self, seat: Seat) -> Option<&str> {
        self.assignment.get(&seat).map(String::as_str)
    }

    /// Whether `seat` lies inside the current geometry.
    #[must_use]
    pub fn contains(&self, seat: Seat) -> bool {
        seat.row() < self.rows && seat.col() < self.cols
    }

    /// Display state of a seat inside the grid.
    #[must_use]
    pub fn seat_state(&self, seat: Seat) -> SeatState {
        if self.disabled.contains(&seat) {
            SeatState::Disabled
        } else if self.assignment.contains_key(&seat) {
            SeatState::Assigned
        } else {
            SeatState::Available
        }
    }

    /// Replaces the geometry with `rows`×`cols`.
    ///
    /// Clears the disabled set and the assignment so no stale coordinate
    /// can reference the old grid. The roster is untouched; a later
    /// [`arrange`](Self::arrange) may fail with `CapacityExceeded` if the
    /// room shrank below the roster size.
    pub fn resize(&mut self, rows: u8, cols: u8) -> Result<(), ClassroomError> {
        if !Self::valid_dim(rows) || !Self::valid_dim(cols) {
            return Err(ClassroomError::InvalidGeometry { rows, cols });
        }
        self.rows = rows;
        self.cols = cols;
        self.disabled.clear();
        self.assignment.clear();
        debug!(rows, cols, "classroom resized");
        Ok(())
    }

    /// Flips whether `seat` is disabled; returns the new membership.
    ///
    /// Rejected with `SeatAssigned` while a student sits there (the
    /// arrangement must be cleared first) and with `OutOfBounds` for seats
    /// outside the grid.
    pub fn toggle_disabled(&mut self, seat: Seat) -> Result<bool, ClassroomError> {
        if !self.contains(seat) {
            return Err(ClassroomError::OutOfBounds {
                seat,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.assignment.contains_key(&seat) {
            return Err(ClassroomError::SeatAssigned { seat });
        }
        let disabled = if self.disabled.remove(&seat) {
            false
        } else {
            self.disabled.insert(seat);
            true
        };
        debug!(%seat, disabled, "seat toggled");
        Ok(disabled)
    }

    /// Replaces the roster wholesale.
    ///
    /// An assignment made against the previous roster stays in place until
    /// the next [`arrange`](Self::arrange) or
    /// [`clear_assignment`](Self::clear_assignment).
    pub fn set_roster(&mut self, names: Vec<String>) {
        debug!(students = names.len(), "roster replaced");
        self.roster = names;
    }

    /// All non-disabled seats in row-major order (row ascending, then
    /// column ascending).
    ///
    /// The order is part of the arrangement contract: the i-th shuffled
    /// student goes to the i-th seat returned here.
    #[must_use]
    pub fn available_seats(&self) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.rows as usize * self.cols as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let seat = Seat::new(row, col);
                if !self.disabled.contains(&seat) {
                    seats.push(seat);
                }
            }
        }
        seats
    }

    /// Assigns a uniform random permutation of the roster to the available
    /// seats, replacing any previous assignment.
    ///
    /// Fails with `EmptyRoster` or `CapacityExceeded` without touching the
    /// existing assignment or roster.
    pub fn arrange(&mut self) -> Result<(), ClassroomError> {
        if self.roster.is_empty() {
            return Err(ClassroomError::EmptyRoster);
        }
        let seats = self.available_seats();
        if self.roster.len() > seats.len() {
            return Err(ClassroomError::CapacityExceeded {
                students: self.roster.len(),
                seats: seats.len(),
            });
        }
        let mut shuffled = self.roster.clone();
        shuffled.shuffle(&mut rand::rng());
        self.assignment = seats.into_iter().zip(shuffled).collect();
        debug!(assigned = self.assignment.len(), "arrangement complete");
        Ok(())
    }

    /// Empties the assignment. Idempotent.
    pub fn clear_assignment(&mut self) {
        self.assignment.clear();
    }

    /// The durable part of the state: geometry and disabled seats only.
    #[must_use]
    pub fn export_state(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            rows: self.rows,
            cols: self.cols,
            disabled_seats: self.disabled.clone(),
        }
    }

    /// Replaces geometry and disabled set from a snapshot and clears the
    /// assignment.
    ///
    /// Fails with `InvalidSnapshot` when the geometry is out of range or a
    /// disabled seat falls outside it; the current state is untouched on
    /// failure.
    pub fn import_state(&mut self, snapshot: LayoutSnapshot) -> Result<(), ClassroomError> {
        if !Self::valid_dim(snapshot.rows) || !Self::valid_dim(snapshot.cols) {
            return Err(ClassroomError::InvalidSnapshot {
                message: format!(
                    "rows and columns must be between 1 and {MAX_DIM}, got {}x{}",
                    snapshot.rows, snapshot.cols
                ),
            });
        }
        if let Some(seat) = snapshot
            .disabled_seats
            .iter()
            .find(|s| s.row() >= snapshot.rows || s.col() >= snapshot.cols)
        {
            return Err(ClassroomError::InvalidSnapshot {
                message: format!(
                    "disabled seat {seat} is outside the {}x{} grid",
                    snapshot.rows, snapshot.cols
                ),
            });
        }
        self.rows = snapshot.rows;
        self.cols = snapshot.cols;
        self.disabled = snapshot.disabled_seats;
        self.assignment.clear();
        debug!(rows = self.rows, cols = self.cols, disabled = self.disabled.len(), "layout imported");
        Ok(())
    }

    /// Checks the invariants every live state must uphold.
    ///
    /// Mutations maintain these by construction; a state that arrived by
    /// deserialization has not been through any mutation, so holders of
    /// such a value call this before trusting it: geometry in range,
    /// disabled seats and assigned seats inside the grid, and no seat both
    /// disabled and assigned.
    pub fn validate(&self) -> Result<(), ClassroomError> {
        if !Self::valid_dim(self.rows) || !Self::valid_dim(self.cols) {
            return Err(ClassroomError::InvalidGeometry {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if let Some(&seat) = self
            .disabled
            .iter()
            .chain(self.assignment.keys())
            .find(|s| !self.contains(**s))
        {
            return Err(ClassroomError::OutOfBounds {
                seat,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if let Some(&seat) = self.assignment.keys().find(|s| self.disabled.contains(s)) {
            return Err(ClassroomError::InvalidSnapshot {
                message: format!("seat {seat} is both disabled and assigned"),
            });
        }
        Ok(())
    }

    fn valid_dim(dim: u8) -> bool {
        (1..=MAX_DIM).contains(&dim)
    }
}
