//! Error types shared across the project model and the analysis engine

use crate::models::Category;
use thiserror::Error;

/// Malformed invocations against the Project Store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("Invalid file name or type: {0:?} (expected .json, .js, .html, .css or .png)")]
    InvalidArtifactName(String),

    #[error("No such file in project: {0}")]
    UnknownArtifact(String),
}

/// Diagnostic produced when `manifest.json` is not valid JSON.
///
/// Never propagated out of the validator; it becomes an `Invalid JSON` finding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ManifestDecodeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ManifestDecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Unexpected fault inside one rule set. The other categories are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
#[error("Error in {category} analysis: {message}")]
pub struct AnalysisFailure {
    pub category: Category,
    pub message: String,
}

impl AnalysisFailure {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}
