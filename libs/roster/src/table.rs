//! Column-oriented view of a delimited roster file.

use std::fs;
use std::path::Path;

use encoding_rs::BIG5;
use tracing::debug;

use crate::error::ImportError;

/// A parsed roster file: header row plus data rows, all as text.
///
/// The table keeps every row and column as read; nothing is interpreted
/// until the operator picks a name column with [`column`](Self::column).
#[derive(Debug, Clone)]
pub struct RosterTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl RosterTable {
    /// Reads and parses a delimited file.
    ///
    /// Decoding tries UTF-8 first, then Big5; ragged rows are tolerated
    /// (short rows simply have missing fields).
    pub fn read_path(path: impl AsRef<Path>) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ImportError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode(&bytes).ok_or_else(|| ImportError::Undecodable {
            path: path.to_path_buf(),
        })?;
        let table = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            columns = table.headers.len(),
            rows = table.records.len(),
            "roster file read"
        );
        Ok(table)
    }

    /// Parses already-decoded delimited text.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers: Vec<String> = reader
            .headers()
            .map_err(ImportError::Malformed)?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            return Err(ImportError::NoHeader);
        }
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(ImportError::Malformed)?;
            records.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, records })
    }

    /// The column names from the header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extracts one column by header name, preserving row order.
    ///
    /// Fields that are missing (short row) or empty are dropped; everything
    /// else passes through as-is, duplicates and whitespace included.
    pub fn column(&self, name: &str) -> Result<Vec<String>, ImportError> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ImportError::UnknownColumn {
                name: name.to_string(),
                available: self.headers.clone(),
            })?;
        Ok(self
            .records
            .iter()
            .filter_map(|record| record.get(index))
            .filter(|field| !field.is_empty())
            .cloned()
            .collect())
    }
}

/// Decodes roster bytes: strict UTF-8 first, then Big5.
fn decode(bytes: &[u8]) -> Option<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(text.to_string());
    }
    let (text, _, had_errors) = BIG5.decode(bytes);
    if had_errors {
        None
    } else {
        debug!("roster file decoded as Big5");
        Some(text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_headers_and_rows() {
        let table = RosterTable::parse("name,id\nAlice,1\nBob,2\n").unwrap();
        assert_eq!(table.headers(), ["name", "id"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("id").unwrap(), ["1", "2"]);
    }

    #[test]
    fn column_drops_missing_and_empty_but_keeps_blanks() {
        let text = "name,id\nAlice,1\n,2\n  ,3\nDave\nEve,5\n";
        let table = RosterTable::parse(text).unwrap();
        // "" dropped, "  " kept, short row ("Dave" has no id but has a name).
        assert_eq!(table.column("name").unwrap(), ["Alice", "  ", "Dave", "Eve"]);
        // The short row is missing its id field entirely.
        assert_eq!(table.column("id").unwrap(), ["1", "2", "3", "5"]);
    }

    #[test]
    fn column_keeps_duplicates_in_order() {
        let table = RosterTable::parse("name\nBob\nAlice\nBob\n").unwrap();
        assert_eq!(table.column("name").unwrap(), ["Bob", "Alice", "Bob"]);
    }

    #[test]
    fn unknown_column_lists_available() {
        let table = RosterTable::parse("name,id\nAlice,1\n").unwrap();
        let err = table.column("seat").unwrap_err();
        match err {
            ImportError::UnknownColumn { name, available } => {
                assert_eq!(name, "seat");
                assert_eq!(available, ["name", "id"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("name\n張三\n李四\n".as_bytes()).unwrap();
        let table = RosterTable::read_path(file.path()).unwrap();
        assert_eq!(table.column("name").unwrap(), ["張三", "李四"]);
    }

    #[test]
    fn falls_back_to_big5() {
        let (encoded, _, had_errors) = encoding_rs::BIG5.encode("name\n張三\n李四\n");
        assert!(!had_errors);
        // Big5-encoded CJK is not valid UTF-8, so this exercises the fallback.
        assert!(std::str::from_utf8(&encoded).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&encoded).unwrap();
        let table = RosterTable::read_path(file.path()).unwrap();
        assert_eq!(table.column("name").unwrap(), ["張三", "李四"]);
    }

    #[test]
    fn undecodable_bytes_are_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x6e, 0x61, 0xff, 0xff, 0xff]).unwrap();
        assert!(matches!(
            RosterTable::read_path(file.path()),
            Err(ImportError::Undecodable { .. })
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        assert!(matches!(
            RosterTable::read_path("/nonexistent/roster.csv"),
            Err(ImportError::Unreadable { .. })
        ));
    }
}
