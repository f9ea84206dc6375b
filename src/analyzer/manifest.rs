//! Manifest validation: format, required and recommended fields, icons

use crate::error::ManifestDecodeError;
use crate::models::{Finding, Manifest};
use crate::parser::parse_project_manifest;
use crate::project::Project;
use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 3] = ["manifest_version", "name", "version"];
pub const RECOMMENDED_FIELDS: [&str; 4] = ["description", "icons", "author", "homepage_url"];
pub const REQUIRED_ICON_SIZES: [&str; 3] = ["16", "48", "128"];
pub const EXPECTED_MANIFEST_VERSION: f64 = 3.0;

/// Decode `manifest.json` from the project and validate it.
pub fn validate_manifest(project: &Project) -> Vec<Finding> {
    analyze_manifest(&parse_project_manifest(project), project)
}

/// Validate an already decoded manifest. A decode failure yields a single
/// error finding and nothing else.
pub fn analyze_manifest(
    decoded: &Result<Manifest, ManifestDecodeError>,
    project: &Project,
) -> Vec<Finding> {
    let manifest = match decoded {
        Ok(manifest) => manifest,
        Err(err) => {
            return vec![Finding::error(
                "Invalid JSON",
                format!("The manifest.json file contains invalid JSON: {}", err),
            )];
        }
    };

    let mut findings = vec![Finding::good(
        "Valid JSON Format",
        "The manifest.json file is properly formatted JSON.",
    )];

    for field in REQUIRED_FIELDS {
        if !manifest.has(field) {
            findings.push(Finding::error(
                format!("Missing {}", field),
                format!("The manifest.json must include a \"{}\" field.", field),
            ));
        }
    }

    if manifest.manifest_version().is_some_and(|v| !is_expected_version(v)) {
        findings.push(Finding::warning(
            "Manifest Version",
            "Use manifest_version: 3 for modern Chrome extensions.",
        ));
    }

    for field in RECOMMENDED_FIELDS {
        if !manifest.has(field) {
            findings.push(Finding::warning(
                format!("Missing {}", field),
                format!(
                    "Consider adding a \"{}\" field to improve extension metadata.",
                    field
                ),
            ));
        }
    }

    if manifest.icons().is_some() {
        for size in REQUIRED_ICON_SIZES {
            match manifest.icon(size) {
                None => findings.push(Finding::warning(
                    format!("Missing Icon Size {}", size),
                    format!("Include a {}x{} icon for better compatibility.", size, size),
                )),
                Some(file) if !project.contains(&file) => findings.push(Finding::error(
                    format!("Missing Icon File {}", file),
                    format!(
                        "The icon file {} is referenced but not found in the project.",
                        file
                    ),
                )),
                Some(_) => {}
            }
        }
    }

    findings
}

/// Any present value other than the number 3, including `0` and `null`, warns.
fn is_expected_version(value: &Value) -> bool {
    value.as_f64() == Some(EXPECTED_MANIFEST_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn project_with_manifest(manifest: &str) -> Project {
        let mut project = Project::new();
        project.add("manifest.json", manifest).unwrap();
        project
    }

    fn titles(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn test_minimal_manifest() {
        let project =
            project_with_manifest(r#"{"manifest_version":3,"name":"X","version":"1.0"}"#);
        let findings = validate_manifest(&project);

        assert_eq!(
            titles(&findings),
            vec![
                "Valid JSON Format",
                "Missing description",
                "Missing icons",
                "Missing author",
                "Missing homepage_url",
            ]
        );
        assert_eq!(findings[0].severity, Severity::Good);
        assert!(findings[1..].iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_invalid_json_stops_validation() {
        let findings = validate_manifest(&project_with_manifest("not json"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].title, "Invalid JSON");
        assert!(findings[0]
            .description
            .starts_with("The manifest.json file contains invalid JSON: "));
    }

    #[test]
    fn test_missing_manifest_file_is_invalid_json() {
        let findings = validate_manifest(&Project::new());
        assert_eq!(titles(&findings), vec!["Invalid JSON"]);
    }

    #[test]
    fn test_falsy_required_fields_are_missing() {
        let project = project_with_manifest(r#"{"manifest_version":0,"name":"","version":null}"#);
        let findings = validate_manifest(&project);
        let errors: Vec<&str> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .map(|f| f.title.as_str())
            .collect();
        assert_eq!(
            errors,
            vec!["Missing manifest_version", "Missing name", "Missing version"]
        );
        assert!(titles(&findings).contains(&"Manifest Version"));
    }

    #[test_case("2", true ; "older version")]
    #[test_case("\"3\"", true ; "string version")]
    #[test_case("3", false ; "integer three")]
    #[test_case("3.0", false ; "float three")]
    #[test_case("0", true ; "zero version")]
    #[test_case("null", true ; "null version")]
    fn test_manifest_version_warning(version: &str, warns: bool) {
        let manifest = format!(
            r#"{{"manifest_version":{},"name":"X","version":"1.0"}}"#,
            version
        );
        let findings = validate_manifest(&project_with_manifest(&manifest));
        assert_eq!(titles(&findings).contains(&"Manifest Version"), warns);
    }

    #[test]
    fn test_absent_version_only_reports_missing() {
        let findings = validate_manifest(&project_with_manifest(r#"{"name":"X","version":"1.0"}"#));
        assert!(titles(&findings).contains(&"Missing manifest_version"));
        assert!(!titles(&findings).contains(&"Manifest Version"));
    }

    #[test]
    fn test_icon_checks() {
        let mut project = project_with_manifest(
            r#"{
                "manifest_version": 3, "name": "X", "version": "1.0",
                "description": "d", "author": "a", "homepage_url": "https://example.com",
                "icons": {"16": "icon16.png", "128": "icons/icon128.png"}
            }"#,
        );
        project.add("icon16.png", "").unwrap();

        let findings = validate_manifest(&project);
        assert_eq!(
            titles(&findings),
            vec![
                "Valid JSON Format",
                "Missing Icon Size 48",
                "Missing Icon File icons/icon128.png",
            ]
        );
        assert_eq!(findings[1].severity, Severity::Warning);
        assert_eq!(findings[2].severity, Severity::Error);
    }

    #[test]
    fn test_non_object_icons_report_every_size() {
        let project = project_with_manifest(
            r#"{"manifest_version":3,"name":"X","version":"1.0","icons":"icon.png"}"#,
        );
        let findings = validate_manifest(&project);
        let icon_titles: Vec<&str> = titles(&findings)
            .into_iter()
            .filter(|t| t.starts_with("Missing Icon"))
            .collect();
        assert_eq!(
            icon_titles,
            vec!["Missing Icon Size 16", "Missing Icon Size 48", "Missing Icon Size 128"]
        );
    }
}
