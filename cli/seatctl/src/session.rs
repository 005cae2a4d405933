//! Session persistence.
//!
//! The session file holds the full live state (layout, roster, assignment)
//! under the user config directory, so each `seatctl` invocation picks up
//! where the previous one left off. This is distinct from `layout save`,
//! which writes only the durable layout payload.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use seatplan_classroom::Classroom;
use tracing::debug;

/// Session file name under the config directory.
const SESSION_FILE: &str = "session.json";

/// Get the default session file path.
fn default_path() -> Result<PathBuf> {
    ProjectDirs::from("dev", "seatplan", "seatctl")
        .map(|dirs| dirs.config_dir().join(SESSION_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// The live classroom state carried between invocations.
#[derive(Debug)]
pub struct Session {
    pub room: Classroom,
    path: PathBuf,
}

impl Session {
    /// Open the session at `override_path`, or the default location.
    ///
    /// A missing file yields the default classroom (6×8, nothing loaded).
    pub fn open(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => default_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "no session file, starting fresh");
            return Ok(Self {
                room: Classroom::new(),
                path,
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {:?}", path))?;
        let room: Classroom = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {:?}", path))?;
        // A hand-edited file must not smuggle in state the mutation API
        // could never produce.
        room.validate()
            .with_context(|| format!("Invalid session state in {:?}", path))?;

        Ok(Self { room, path })
    }

    /// Save the session back to its file.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create session directory {:?}", dir))?;
        }
        let contents = serde_json::to_string_pretty(&self.room)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write session to {:?}", self.path))?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use seatplan_classroom::Seat;

    use super::*;

    #[test]
    fn missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = Session::open(Some(&path)).unwrap();
        assert_eq!((session.room.rows(), session.room.cols()), (6, 8));
    }

    #[test]
    fn roundtrips_full_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::open(Some(&path)).unwrap();
        session.room.resize(3, 4).unwrap();
        session.room.toggle_disabled(Seat::new(1, 2)).unwrap();
        session.room.set_roster(vec!["Alice".into(), "Bob".into()]);
        session.room.arrange().unwrap();
        session.save().unwrap();

        let reloaded = Session::open(Some(&path)).unwrap();
        assert_eq!((reloaded.room.rows(), reloaded.room.cols()), (3, 4));
        assert!(reloaded.room.disabled_seats().contains(&Seat::new(1, 2)));
        assert_eq!(reloaded.room.roster().len(), 2);
        assert_eq!(reloaded.room.assignment(), session.room.assignment());
    }

    #[test]
    fn garbage_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(Session::open(Some(&path)).is_err());
    }

    #[test]
    fn invariant_violating_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        // Parses fine, but the geometry is out of range and seat 1,1 is
        // both disabled and assigned.
        fs::write(
            &path,
            r#"{
                "rows": 0, "cols": 200,
                "disabled": ["1,1"],
                "roster": ["Alice"],
                "assignment": {"1,1": "Alice"}
            }"#,
        )
        .unwrap();
        let err = Session::open(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid session state"));

        // In-bounds geometry with a disabled+assigned overlap fails too.
        fs::write(
            &path,
            r#"{
                "rows": 2, "cols": 2,
                "disabled": ["1,1"],
                "roster": ["Alice"],
                "assignment": {"1,1": "Alice"}
            }"#,
        )
        .unwrap();
        assert!(Session::open(Some(&path)).is_err());
    }
}
