//! Report rendering for export

use crate::models::{Category, Finding, Report, Severity};
use crate::utils::escape_html;
use anyhow::{Context, Result};

pub fn generate_markdown_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("# Extension Analysis Report\n\n");

    // Summary
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Passed**: {}\n", report.count(Severity::Good)));
    out.push_str(&format!("- **Warnings**: {}\n", report.count(Severity::Warning)));
    out.push_str(&format!("- **Errors**: {}\n\n", report.count(Severity::Error)));

    for (category, findings) in report.sections() {
        if category == Category::Performance && findings.is_empty() {
            continue;
        }
        out.push_str(&format!("## {}\n\n", category.heading()));
        for finding in findings {
            out.push_str(&format!(
                "- {} **{}**: {}\n",
                severity_marker(finding.severity),
                finding.title,
                finding.description
            ));
        }
        out.push('\n');
    }

    if !report.failures.is_empty() {
        out.push_str("## ⛔ Analysis Failures\n\n");
        for failure in &report.failures {
            out.push_str(&format!("- {}\n", failure));
        }
        out.push('\n');
    }

    out
}

pub fn generate_html_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(
        r#"<html>
<head>
    <title>Extension Analysis Report</title>
    <style>
        body { font-family: Arial, sans-serif; padding: 20px; }
        .analysis-card { margin-bottom: 20px; }
        .analysis-item { margin-bottom: 10px; padding-bottom: 10px; border-bottom: 1px solid #eee; }
        .analysis-item.good { color: #28a745; }
        .analysis-item.warning { color: #ffc107; }
        .analysis-item.error { color: #dc3545; }
        .analysis-item-title { font-weight: bold; }
        .analysis-item-description { font-size: 0.9em; }
    </style>
</head>
<body>
    <h1>Extension Analysis Report</h1>
"#,
    );

    for (category, findings) in report.sections() {
        if category == Category::Performance && findings.is_empty() {
            continue;
        }
        out.push_str("    <div class=\"analysis-card\">\n");
        out.push_str(&format!("        <h2>{}</h2>\n", category.heading()));
        for finding in findings {
            out.push_str(&html_item(finding));
        }
        out.push_str("    </div>\n");
    }

    for failure in &report.failures {
        out.push_str(&format!(
            "    <p class=\"analysis-item error\">{}</p>\n",
            escape_html(&failure.to_string())
        ));
    }

    out.push_str("</body>\n</html>\n");
    out
}

pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

fn html_item(finding: &Finding) -> String {
    format!(
        "        <div class=\"analysis-item {}\">\n            <div class=\"analysis-item-title\">{}</div>\n            <div class=\"analysis-item-description\">{}</div>\n        </div>\n",
        finding.severity,
        escape_html(&finding.title),
        escape_html(&finding.description)
    )
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "✅",
        Severity::Warning => "⚠️",
        Severity::Error => "❌",
    }
}
