//! # seatplan-roster
//!
//! Reads a delimited student-list file into a column-oriented table so the
//! operator can pick the column holding student names.
//!
//! Decoding tries UTF-8 first and falls back to Big5, matching the legacy
//! files this tool has to accept. Column extraction preserves source row
//! order and drops only missing/empty fields; names that are duplicated or
//! blank-after-trim pass through untouched.

mod error;
mod table;

pub use error::ImportError;
pub use table::RosterTable;
