//! Performance hints: large files and unminified scripts

use crate::models::Finding;
use crate::project::Project;
use crate::utils::round_to_hundredths;

pub const MAX_FILE_KB: f64 = 100.0;
pub const MINIFY_THRESHOLD_CHARS: usize = 1000;

/// Size findings for every artifact first, then minification findings for
/// `.js` artifacts, both in store order.
pub fn check_performance(project: &Project) -> Vec<Finding> {
    let mut findings = Vec::new();

    for artifact in project.iter() {
        let size_kb = round_to_hundredths(artifact.size_bytes() as f64 / 1024.0);
        if size_kb > MAX_FILE_KB {
            findings.push(Finding::warning(
                format!("Large File: {}", artifact.name),
                format!(
                    "The file {} is {:.2}KB. Consider optimizing to improve loading performance.",
                    artifact.name, size_kb
                ),
            ));
        }
    }

    for artifact in project.iter().filter(|a| a.name.ends_with(".js")) {
        if looks_unminified(&artifact.content) {
            findings.push(Finding::warning(
                format!("Unminified JavaScript: {}", artifact.name),
                format!(
                    "The file {} appears unminified. Consider minifying to reduce size.",
                    artifact.name
                ),
            ));
        }
    }

    findings
}

/// Long text on a single line. Length is measured in UTF-16 code units, the
/// way the editor counts characters.
pub fn looks_unminified(content: &str) -> bool {
    content.encode_utf16().count() > MINIFY_THRESHOLD_CHARS && !content.contains('\n')
}
