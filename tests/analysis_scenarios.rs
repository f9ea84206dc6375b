//! End-to-end analysis scenarios through the public API

use extbuilder::models::{Category, Finding, Severity};
use extbuilder::{analyze_project, classify, Project, Session, SpanClass};
use pretty_assertions::assert_eq;

fn project_with(files: &[(&str, &str)]) -> Project {
    let mut project = Project::new();
    for (name, content) in files {
        project.add(name, *content).unwrap();
    }
    project
}

fn count(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

#[test]
fn minimal_manifest_has_one_good_and_four_warnings() {
    let project = project_with(&[(
        "manifest.json",
        r#"{"manifest_version":3,"name":"X","version":"1.0"}"#,
    )]);
    let report = analyze_project(&project);

    assert_eq!(report.manifest.len(), 5);
    assert_eq!(count(&report.manifest, Severity::Good), 1);
    assert_eq!(count(&report.manifest, Severity::Warning), 4);
    assert_eq!(count(&report.manifest, Severity::Error), 0);
}

#[test]
fn invalid_manifest_yields_single_error() {
    let project = project_with(&[("manifest.json", "not json")]);
    let report = analyze_project(&project);

    assert_eq!(report.manifest.len(), 1);
    assert_eq!(report.manifest[0].severity, Severity::Error);
    assert!(report.security.is_empty());
}

#[test]
fn permissions_scenario_yields_five_warnings() {
    let project = project_with(&[(
        "manifest.json",
        r#"{
            "manifest_version": 3, "name": "X", "version": "1.0",
            "content_security_policy": "script-src 'self'",
            "permissions": ["tabs","activeTab","scripting","webRequest","storage","geolocation"]
        }"#,
    )]);
    let report = analyze_project(&project);

    assert_eq!(report.security.len(), 5);
    assert_eq!(count(&report.security, Severity::Warning), 5);
    assert_eq!(report.security[4].title, "Excessive Permissions");
}

#[test]
fn unminified_script_scenario() {
    let long_line = "a".repeat(1500);
    let report = analyze_project(&project_with(&[("app.js", long_line.as_str())]));
    assert_eq!(report.performance.len(), 1);
    assert!(report.performance[0].title.starts_with("Unminified JavaScript"));

    let mut with_newline = long_line.clone();
    with_newline.insert(750, '\n');
    let report = analyze_project(&project_with(&[("app.js", with_newline.as_str())]));
    assert!(report.is_empty(Category::Performance));
}

#[test]
fn analysis_twice_gives_equal_reports() {
    let session = Session::new().unwrap();
    assert_eq!(session.analyze(), session.analyze());
}

#[test]
fn broken_icon_reference_is_an_error() {
    let project = project_with(&[
        (
            "manifest.json",
            r#"{"manifest_version":3,"name":"X","version":"1.0",
                "icons":{"16":"icon16.png","48":"icon48.png","128":"icon128.png"}}"#,
        ),
        ("icon16.png", ""),
        ("icon48.png", ""),
    ]);
    let report = analyze_project(&project);
    let errors: Vec<&str> = report
        .manifest
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .map(|f| f.title.as_str())
        .collect();
    assert_eq!(errors, vec!["Missing Icon File icon128.png"]);
}

#[test]
fn classify_simple_object() {
    let spans = classify(r#"{"a":1}"#);
    let tagged: Vec<(SpanClass, &str)> = spans
        .iter()
        .filter(|s| s.class != SpanClass::Literal)
        .map(|s| (s.class, s.text.as_str()))
        .collect();
    assert_eq!(tagged, vec![(SpanClass::Key, "\"a\":"), (SpanClass::Value, "1")]);

    let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt, r#"{"a":1}"#);
}
