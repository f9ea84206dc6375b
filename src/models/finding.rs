//! Findings produced by the rule sets

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Warning,
    Error,
}

/// The three report sections, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Manifest,
    Security,
    Performance,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Manifest, Category::Security, Category::Performance];

    /// Section heading used by the exporters.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Manifest => "Manifest Validation",
            Category::Security => "Security Check",
            Category::Performance => "Performance Analysis",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Finding {
    pub fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn good(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Good, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, description)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Good => write!(f, "good"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Manifest => write!(f, "manifest"),
            Category::Security => write!(f, "security"),
            Category::Performance => write!(f, "performance"),
        }
    }
}
