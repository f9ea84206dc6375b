//! Parsing of project artifacts

pub mod manifest;

pub use manifest::{parse_manifest, parse_project_manifest};
