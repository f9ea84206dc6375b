//! Loading and saving projects

pub mod directory;
pub mod snapshot;

pub use directory::{load_from_directory, write_to_directory};
pub use snapshot::{load_snapshot, parse_snapshot, save_snapshot};

use crate::models::MANIFEST_FILE;
use crate::project::Session;
use anyhow::Result;
use std::path::Path;

/// Load a session from a project directory or a snapshot file.
pub fn load_session(path: &Path) -> Result<Session> {
    if path.is_dir() {
        let mut session = Session::new()?;
        session.project = load_from_directory(path)?;
        if session.project.contains(MANIFEST_FILE) {
            session.project.select(MANIFEST_FILE)?;
        }
        Ok(session)
    } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
        let snapshot = load_snapshot(path)?;
        Ok(Session::from_snapshot(&snapshot)?)
    } else {
        anyhow::bail!("Unsupported input. Expected a project directory or a .json snapshot")
    }
}
