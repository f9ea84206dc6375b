//! Report assembly and export

pub mod generator;

pub use generator::{generate_html_report, generate_json_report, generate_markdown_report};

use crate::models::{Finding, Report};
use anyhow::Result;

/// Wrap the three finding sequences as a report, unchanged.
pub fn assemble(
    manifest: Vec<Finding>,
    security: Vec<Finding>,
    performance: Vec<Finding>,
) -> Report {
    Report::new(manifest, security, performance)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Html,
    Json,
}

pub fn generate_report(report: &Report, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(generate_markdown_report(report)),
        ExportFormat::Html => Ok(generate_html_report(report)),
        ExportFormat::Json => generate_json_report(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_keeps_order_and_duplicates() {
        let dup = Finding::warning("Missing author", "x");
        let report = assemble(
            vec![dup.clone(), dup.clone()],
            vec![Finding::error("Unsafe CSP", "y")],
            vec![],
        );
        assert_eq!(report.manifest, vec![dup.clone(), dup]);
        assert_eq!(report.security.len(), 1);
        assert!(report.performance.is_empty());
        assert!(report.failures.is_empty());
    }
}
