//! Project artifacts and the recognized file kinds

use serde::{Deserialize, Serialize};

/// File kinds the authoring tool knows how to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Json,
    JavaScript,
    Html,
    Css,
    Png,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Json,
        ArtifactKind::JavaScript,
        ArtifactKind::Html,
        ArtifactKind::Css,
        ArtifactKind::Png,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Json => ".json",
            ArtifactKind::JavaScript => ".js",
            ArtifactKind::Html => ".html",
            ArtifactKind::Css => ".css",
            ArtifactKind::Png => ".png",
        }
    }

    /// Binary kinds are stored as data URLs rather than raw text.
    pub fn is_binary(self) -> bool {
        matches!(self, ArtifactKind::Png)
    }

    /// Classify a name by its suffix. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| name.ends_with(kind.extension()))
    }
}

/// Extension-membership test used by `add` and by every import path.
pub fn is_recognized(name: &str) -> bool {
    ArtifactKind::from_name(name).is_some()
}

/// Content a freshly created file starts with.
pub fn default_content_for(name: &str) -> &'static str {
    match ArtifactKind::from_name(name) {
        Some(kind) if kind.is_binary() => "",
        _ => "// New file",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub content: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> Option<ArtifactKind> {
        ArtifactKind::from_name(&self.name)
    }

    /// Size of the content once encoded as UTF-8.
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}
