//! Canonical starter files for a new extension project

use super::Project;
use crate::error::ProjectError;

pub const DEFAULT_MANIFEST: &str = r#"{
  "manifest_version": 3,
  "name": "My Extension",
  "version": "1.0",
  "description": "A simple Chrome extension",
  "action": {
    "default_popup": "popup.html",
    "default_icon": {
      "16": "icon16.png",
      "48": "icon48.png",
      "128": "icon128.png"
    }
  },
  "permissions": [
    "storage"
  ],
  "background": {
    "service_worker": "background.js"
  }
}"#;

pub const DEFAULT_POPUP_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>My Extension</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <h1>Hello Extension!</h1>
    <script src="popup.js"></script>
</body>
</html>"#;

pub const DEFAULT_POPUP_JS: &str = "// Popup script\nconsole.log(\"Extension loaded!\");";

pub const DEFAULT_BACKGROUND_JS: &str = "// Background script\nconsole.log(\"Background script running\");";

pub const DEFAULT_STYLES_CSS: &str = "/* Extension styles */\nbody {\n    font-family: Arial, sans-serif;\n}";

pub const DEFAULT_FILES: [(&str, &str); 5] = [
    ("manifest.json", DEFAULT_MANIFEST),
    ("popup.html", DEFAULT_POPUP_HTML),
    ("popup.js", DEFAULT_POPUP_JS),
    ("background.js", DEFAULT_BACKGROUND_JS),
    ("styles.css", DEFAULT_STYLES_CSS),
];

/// Add the starter files, overwriting any with the same names.
pub fn seed(project: &mut Project) -> Result<(), ProjectError> {
    for (name, content) in DEFAULT_FILES {
        project.add(name, content)?;
    }
    Ok(())
}

pub fn default_project() -> Result<Project, ProjectError> {
    let mut project = Project::new();
    seed(&mut project)?;
    Ok(project)
}
