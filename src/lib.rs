//! Browser Extension Builder core
//!
//! The project model behind the extension authoring tool and the rule-based
//! analysis that turns a project into a categorized report of manifest,
//! security and performance findings.

pub mod error;
pub mod models;
pub mod project;
pub mod parser;
pub mod analyzer;
pub mod report;
pub mod highlight;
pub mod loader;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use analyzer::analyze_project;
pub use error::{AnalysisFailure, ManifestDecodeError, ProjectError};
pub use highlight::{classify, Span, SpanClass};
pub use models::{Artifact, ArtifactKind, Category, Finding, ProjectSnapshot, Report, Settings, Severity};
pub use project::{Project, Session};
pub use report::ExportFormat;

use anyhow::Result;
use std::path::Path;

/// Load a project directory or snapshot file and analyze it.
pub fn analyze_path(input_path: &Path) -> Result<Report> {
    let session = loader::load_session(input_path)?;
    Ok(session.analyze())
}
