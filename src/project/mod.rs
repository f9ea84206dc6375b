//! The Project Store: named artifacts plus the current selection

pub mod defaults;
pub mod session;

pub use session::Session;

use crate::error::ProjectError;
use crate::models::{default_content_for, is_recognized, Artifact, ProjectSnapshot};
use crate::utils::encode_png_data_url;
use tracing::debug;

/// Artifacts in insertion order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    artifacts: Vec<Artifact>,
    selected: Option<String>,
    dirty: bool,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an artifact.
    pub fn add(&mut self, name: &str, content: impl Into<String>) -> Result<(), ProjectError> {
        if !is_recognized(name) {
            return Err(ProjectError::InvalidArtifactName(name.to_string()));
        }
        let content = content.into();
        match self.position(name) {
            Some(index) => self.artifacts[index].content = content,
            None => self.artifacts.push(Artifact::new(name, content)),
        }
        self.dirty = true;
        debug!(file = name, "added artifact");
        Ok(())
    }

    /// Add a file with the placeholder content a new file starts with.
    pub fn add_new(&mut self, name: &str) -> Result<(), ProjectError> {
        self.add(name, default_content_for(name))
    }

    /// Store PNG bytes as a data URL.
    pub fn add_icon(&mut self, name: &str, bytes: &[u8]) -> Result<(), ProjectError> {
        if !name.ends_with(".png") {
            return Err(ProjectError::InvalidArtifactName(name.to_string()));
        }
        self.add(name, encode_png_data_url(bytes))
    }

    /// Stored content, or `""` when the artifact does not exist.
    pub fn get(&self, name: &str) -> &str {
        self.artifact(name).map(|a| a.content.as_str()).unwrap_or("")
    }

    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    /// Replace content of an existing artifact. Never creates one.
    pub fn update(&mut self, name: &str, content: impl Into<String>) -> bool {
        match self.position(name) {
            Some(index) => {
                self.artifacts[index].content = content.into();
                true
            }
            None => false,
        }
    }

    /// Remove an artifact, clearing the selection if it pointed there.
    pub fn delete(&mut self, name: &str) -> Option<Artifact> {
        let index = self.position(name)?;
        let removed = self.artifacts.remove(index);
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        self.dirty = true;
        debug!(file = name, "deleted artifact");
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_recognized(name: &str) -> bool {
        is_recognized(name)
    }

    pub fn select(&mut self, name: &str) -> Result<(), ProjectError> {
        if !self.contains(name) {
            return Err(ProjectError::UnknownArtifact(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and reset the file-tree dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn to_snapshot_files(&self) -> std::collections::BTreeMap<String, String> {
        self.artifacts
            .iter()
            .map(|a| (a.name.clone(), a.content.clone()))
            .collect()
    }

    /// Build a store from persisted files. Rejects unrecognized names.
    pub fn from_snapshot(snapshot: &ProjectSnapshot) -> Result<Self, ProjectError> {
        let mut project = Project::new();
        for (name, content) in &snapshot.files {
            project.add(name, content.as_str())?;
        }
        Ok(project)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.artifacts.iter().position(|a| a.name == name)
    }
}
