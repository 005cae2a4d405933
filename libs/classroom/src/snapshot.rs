//! Persisted layout format.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::seat::Seat;

/// The durable part of a classroom: geometry plus disabled seats.
///
/// Roster and assignment are intentionally excluded; they belong to a
/// session, not to the room. Seats serialize as `"row,col"` strings, so
/// the on-disk JSON is `{"rows":6,"cols":8,"disabled_seats":["0,3","2,1"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub disabled_seats: BTreeSet<Seat>,
}
