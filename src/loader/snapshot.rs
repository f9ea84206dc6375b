//! Snapshot files on disk

use crate::models::ProjectSnapshot;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_snapshot(path: &Path) -> Result<ProjectSnapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    parse_snapshot(&content)
}

pub fn parse_snapshot(content: &str) -> Result<ProjectSnapshot> {
    serde_json::from_str(content).context("Failed to parse project snapshot")
}

pub fn save_snapshot(path: &Path, snapshot: &ProjectSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    fs::write(path, json).with_context(|| format!("Failed to write snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");

        let mut snapshot = ProjectSnapshot::default();
        snapshot.files.insert("popup.js".to_string(), "a\nb \"quoted\" é".to_string());
        snapshot.settings.theme = "dark".to_string();

        save_snapshot(&path, &snapshot).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_parse_error_has_context() {
        let err = parse_snapshot("{").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse project snapshot");
    }
}
