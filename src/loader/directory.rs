//! Importing a project from disk and writing it back

use crate::models::{is_recognized, ArtifactKind};
use crate::project::Project;
use crate::utils::{decode_png_data_url, encode_png_data_url};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Load every recognized file under `dir`. Names are relative paths with `/`
/// separators; PNGs become data URLs. Other files are skipped.
pub fn load_from_directory(dir: &Path) -> Result<Project> {
    let mut project = Project::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative_path = path
            .strip_prefix(dir)
            .context("Failed to get relative path")?;
        let name = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if !is_recognized(&name) {
            warn!(file = %name, "skipping unsupported file");
            continue;
        }

        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let content = if ArtifactKind::from_name(&name).is_some_and(ArtifactKind::is_binary) {
            encode_png_data_url(&bytes)
        } else {
            String::from_utf8(bytes).with_context(|| format!("Invalid UTF-8 in {}", name))?
        };

        project.add(&name, content)?;
    }

    debug!(files = project.len(), dir = %dir.display(), "loaded project from directory");
    Ok(project)
}

/// Write all artifacts under `dir`, decoding PNG data URLs back to bytes.
/// Fails before writing anything if a name would land outside `dir`.
pub fn write_to_directory(project: &Project, dir: &Path) -> Result<()> {
    if let Some(artifact) = project.iter().find(|a| !stays_inside(&a.name)) {
        bail!("Refusing to write {} outside {}", artifact.name, dir.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    for artifact in project.iter() {
        let file_path = dir.join(&artifact.name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes = match artifact.kind() {
            Some(kind) if kind.is_binary() => decode_png_data_url(&artifact.content)
                .unwrap_or_else(|| artifact.content.clone().into_bytes()),
            _ => artifact.content.clone().into_bytes(),
        };
        fs::write(&file_path, bytes)
            .with_context(|| format!("Failed to write {}", file_path.display()))?;
    }

    Ok(())
}

/// Only plain relative components, the same shape `load_from_directory` produces.
fn stays_inside(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}
