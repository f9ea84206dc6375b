//! Security checks: permissions, content security policy, popup scripts

use crate::error::AnalysisFailure;
use crate::models::{Category, Finding, Manifest};
use crate::project::Project;
use serde_json::Value;

pub const DANGEROUS_PERMISSIONS: [&str; 4] = ["tabs", "activeTab", "scripting", "webRequest"];
pub const MAX_PERMISSIONS: usize = 5;
pub const POPUP_FILE: &str = "popup.html";

/// Substring markers of remotely loaded scripts. Alternate quoting is not
/// detected.
const EXTERNAL_SCRIPT_MARKERS: [&str; 2] = ["<script src=\"http", "<script src=\"//"];

/// Run the security rules. With no manifest, only the popup scan runs.
pub fn check_security(
    manifest: Option<&Manifest>,
    project: &Project,
) -> Result<Vec<Finding>, AnalysisFailure> {
    let mut findings = Vec::new();

    if let Some(manifest) = manifest {
        check_permissions(manifest, &mut findings)?;
        check_csp(manifest, &mut findings);
    }

    check_external_scripts(project.get(POPUP_FILE), &mut findings);

    Ok(findings)
}

fn check_permissions(manifest: &Manifest, findings: &mut Vec<Finding>) -> Result<(), AnalysisFailure> {
    let Some(permissions) = manifest.permissions() else {
        return Ok(());
    };
    let permissions = permissions.as_array().ok_or_else(|| {
        AnalysisFailure::new(
            Category::Security,
            format!("manifest.permissions must be a list, found {}", permissions),
        )
    })?;

    for permission in permissions.iter().filter_map(Value::as_str) {
        if DANGEROUS_PERMISSIONS.contains(&permission) {
            findings.push(Finding::warning(
                format!("Potentially Dangerous Permission: {}", permission),
                format!(
                    "The \"{}\" permission is powerful. Ensure it's necessary and used securely.",
                    permission
                ),
            ));
        }
    }

    if permissions.len() > MAX_PERMISSIONS {
        findings.push(Finding::warning(
            "Excessive Permissions",
            "The extension requests many permissions. Minimize permissions to improve security and user trust.",
        ));
    }

    Ok(())
}

fn check_csp(manifest: &Manifest, findings: &mut Vec<Finding>) {
    match manifest.content_security_policy() {
        None => findings.push(Finding::warning(
            "Missing Content Security Policy",
            "Add a Content Security Policy to restrict resource loading and prevent XSS attacks.",
        )),
        Some(Value::String(csp)) if csp.contains("unsafe-eval") => findings.push(Finding::error(
            "Unsafe CSP",
            "The CSP includes \"unsafe-eval\", which can lead to security vulnerabilities.",
        )),
        Some(_) => {}
    }
}

fn check_external_scripts(popup: &str, findings: &mut Vec<Finding>) {
    if EXTERNAL_SCRIPT_MARKERS.iter().any(|marker| popup.contains(marker)) {
        findings.push(Finding::error(
            "External Scripts Detected",
            "Avoid loading external scripts in popup.html to prevent security risks.",
        ));
    }
}
