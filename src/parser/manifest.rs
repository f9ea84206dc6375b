//! Manifest decoding

use crate::error::ManifestDecodeError;
use crate::models::{Manifest, MANIFEST_FILE};
use crate::project::Project;

/// Decode manifest text as strict JSON. An empty string is a decode error.
pub fn parse_manifest(content: &str) -> Result<Manifest, ManifestDecodeError> {
    let root: serde_json::Value = serde_json::from_str(content)?;
    Ok(Manifest::new(root))
}

/// Decode the project's `manifest.json`, treating a missing file as empty.
pub fn parse_project_manifest(project: &Project) -> Result<Manifest, ManifestDecodeError> {
    parse_manifest(project.get(MANIFEST_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_manifest() {
        let json = r#"{
            "manifest_version": 3,
            "name": "Test Extension",
            "version": "1.0.0"
        }"#;

        let manifest = parse_manifest(json).unwrap();
        assert_eq!(manifest.manifest_version(), Some(&serde_json::json!(3)));
        assert_eq!(manifest.name(), Some("Test Extension"));
        assert_eq!(manifest.version(), Some("1.0.0"));
    }

    #[test]
    fn test_comments_are_rejected() {
        let json = r#"{
            // not allowed
            "manifest_version": 3
        }"#;
        assert!(parse_manifest(json).is_err());
    }

    #[test]
    fn test_missing_manifest_is_decode_error() {
        let err = parse_project_manifest(&Project::new()).unwrap_err();
        assert!(err.message.contains("EOF"), "unexpected message: {}", err.message);
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let manifest = parse_manifest(r#"{"minimum_chrome_version": "100"}"#).unwrap();
        assert!(manifest.has("minimum_chrome_version"));
    }
}
