//! The categorized result of one analysis pass

use super::finding::{Category, Finding, Severity};
use crate::error::AnalysisFailure;
use serde::{Deserialize, Serialize};

/// Three independent finding sequences. Order within each one is the order
/// the checks ran in; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub manifest: Vec<Finding>,
    pub security: Vec<Finding>,
    pub performance: Vec<Finding>,

    /// Rule sets that faulted; their category holds whatever was found before the fault.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<AnalysisFailure>,
}

impl Report {
    pub fn new(manifest: Vec<Finding>, security: Vec<Finding>, performance: Vec<Finding>) -> Self {
        Self {
            manifest,
            security,
            performance,
            failures: Vec::new(),
        }
    }

    pub fn category(&self, category: Category) -> &[Finding] {
        match category {
            Category::Manifest => &self.manifest,
            Category::Security => &self.security,
            Category::Performance => &self.performance,
        }
    }

    /// Renderers drop a section entirely when this is true.
    pub fn is_empty(&self, category: Category) -> bool {
        self.category(category).is_empty()
    }

    /// Categories paired with their findings, always in manifest/security/performance order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[Finding])> {
        Category::ALL.into_iter().map(move |c| (c, self.category(c)))
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.sections()
            .flat_map(|(_, findings)| findings.iter())
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0 || !self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.manifest.len() + self.security.len() + self.performance.len()
    }
}
