//! Seat coordinates and their canonical text form.
//!
//! A seat is identified by its 0-indexed `(row, col)` pair. The canonical
//! string representation is `"row,col"`, which is what the persisted layout
//! format stores. Parsing is strict: no whitespace, no sign, no missing
//! half.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a seat coordinate from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatParseError {
    /// The input is empty.
    #[error("seat coordinate cannot be empty")]
    Empty,

    /// The input has no `,` separator between row and column.
    #[error("seat coordinate missing ',' separator: {0:?}")]
    MissingSeparator(String),

    /// The row or column half is not a small non-negative integer.
    #[error("invalid seat index {value:?}: {source}")]
    InvalidIndex {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// A seat coordinate: 0-indexed row and column inside the grid.
///
/// Ordered by `(row, col)`, so sorted iteration over a set of seats is
/// row-major. Serialized as the canonical `"row,col"` string (roundtrip:
/// parse → format → parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    row: u8,
    col: u8,
}

impl Seat {
    /// Creates a seat at `(row, col)`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The 0-indexed row.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// The 0-indexed column.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// The 1-indexed positional label shown on unassigned seats, e.g. `R3C5`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("R{}C{}", self.row as u16 + 1, self.col as u16 + 1)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Seat {
    type Err = SeatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SeatParseError::Empty);
        }
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| SeatParseError::MissingSeparator(s.to_string()))?;
        let parse = |half: &str| {
            half.parse::<u8>().map_err(|source| SeatParseError::InvalidIndex {
                value: half.to_string(),
                source,
            })
        };
        Ok(Self {
            row: parse(row)?,
            col: parse(col)?,
        })
    }
}

impl serde::Serialize for Seat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Seat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_roundtrip() {
        let seat = Seat::new(3, 7);
        let parsed: Seat = seat.to_string().parse().unwrap();
        assert_eq!(parsed, seat);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<Seat>(), Err(SeatParseError::Empty));
        assert!(matches!(
            "12".parse::<Seat>(),
            Err(SeatParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "1,x".parse::<Seat>(),
            Err(SeatParseError::InvalidIndex { .. })
        ));
        assert!(matches!(
            "-1,2".parse::<Seat>(),
            Err(SeatParseError::InvalidIndex { .. })
        ));
        assert!(matches!(
            " 1,2".parse::<Seat>(),
            Err(SeatParseError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut seats = vec![Seat::new(1, 0), Seat::new(0, 5), Seat::new(0, 1)];
        seats.sort();
        assert_eq!(
            seats,
            vec![Seat::new(0, 1), Seat::new(0, 5), Seat::new(1, 0)]
        );
    }

    #[test]
    fn label_is_one_indexed() {
        assert_eq!(Seat::new(0, 0).label(), "R1C1");
        assert_eq!(Seat::new(2, 4).label(), "R3C5");
    }

    #[test]
    fn serde_uses_canonical_string() {
        let json = serde_json::to_string(&Seat::new(2, 3)).unwrap();
        assert_eq!(json, "\"2,3\"");
        let seat: Seat = serde_json::from_str("\"2,3\"").unwrap();
        assert_eq!(seat, Seat::new(2, 3));
        assert!(serde_json::from_str::<Seat>("\"2;3\"").is_err());
    }
}
