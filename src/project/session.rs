//! Editing session: the project, its settings and the selection, passed
//! explicitly to whatever drives the UI.

use super::{defaults, Project};
use crate::analyzer::analyze_project;
use crate::error::ProjectError;
use crate::models::{ProjectSnapshot, Report, Settings, MANIFEST_FILE};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub project: Project,
    pub settings: Settings,
}

impl Session {
    /// Fresh session with the starter files and `manifest.json` selected.
    pub fn new() -> Result<Self, ProjectError> {
        let mut project = defaults::default_project()?;
        project.select(MANIFEST_FILE)?;
        Ok(Self {
            project,
            settings: Settings::default(),
        })
    }

    /// Session seeded with the starter files, then overwritten by a snapshot.
    pub fn from_snapshot(snapshot: &ProjectSnapshot) -> Result<Self, ProjectError> {
        let mut session = Self::new()?;
        session.restore(snapshot)?;
        Ok(session)
    }

    /// Replace files and settings wholesale. On error the session is untouched.
    pub fn restore(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ProjectError> {
        let mut project = Project::from_snapshot(snapshot)?;
        if project.contains(MANIFEST_FILE) {
            project.select(MANIFEST_FILE)?;
        }
        self.project = project;
        self.settings = snapshot.settings.clone().with_fallbacks();
        debug!(files = self.project.len(), "restored session from snapshot");
        Ok(())
    }

    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            files: self.project.to_snapshot_files(),
            settings: self.settings.clone(),
        }
    }

    pub fn analyze(&self) -> Report {
        analyze_project(&self.project)
    }

    /// Content of the selected artifact, if any.
    pub fn current_content(&self) -> Option<&str> {
        self.project.selected().map(|name| self.project.get(name))
    }

    /// Write editor text back into the selected artifact.
    pub fn edit_current(&mut self, content: impl Into<String>) -> bool {
        match self.project.selected().map(str::to_string) {
            Some(name) => self.project.update(&name, content),
            None => false,
        }
    }

    /// Whether enough time has passed since the last save to save again.
    pub fn autosave_due(&self, since_last_save: Duration) -> bool {
        self.settings
            .autosave_interval()
            .is_some_and(|interval| since_last_save >= interval)
    }
}
