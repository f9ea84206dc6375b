//! Rule-based analysis of an extension project

pub mod manifest;
pub mod performance;
pub mod security;

pub use manifest::{analyze_manifest, validate_manifest};
pub use performance::check_performance;
pub use security::check_security;

use crate::models::Report;
use crate::parser::parse_project_manifest;
use crate::project::Project;
use crate::report::assemble;
use tracing::{debug, warn};

/// Run manifest, security and performance rules, in that order, and
/// assemble the report. A manifest decode failure only truncates the
/// manifest category; a faulting rule set is recorded in `failures`.
pub fn analyze_project(project: &Project) -> Report {
    let decoded = parse_project_manifest(project);

    let manifest_findings = analyze_manifest(&decoded, project);
    debug!(findings = manifest_findings.len(), "manifest rules done");

    let mut failures = Vec::new();
    let security_findings = match check_security(decoded.as_ref().ok(), project) {
        Ok(findings) => findings,
        Err(failure) => {
            warn!(%failure, "security rules failed");
            failures.push(failure);
            Vec::new()
        }
    };
    debug!(findings = security_findings.len(), "security rules done");

    let performance_findings = check_performance(project);
    debug!(findings = performance_findings.len(), "performance rules done");

    let mut report = assemble(manifest_findings, security_findings, performance_findings);
    report.failures = failures;
    report
}
