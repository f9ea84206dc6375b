//! Core data models for the project and its analysis

pub mod artifact;
pub mod finding;
pub mod manifest;
pub mod report;
pub mod snapshot;

pub use artifact::*;
pub use finding::*;
pub use manifest::*;
pub use report::*;
pub use snapshot::*;
