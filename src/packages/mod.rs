//! Workspace packages: discovery from manifests and matching against
//! changed paths.

pub mod discovery;
pub mod matcher;

use std::path::PathBuf;

pub use discovery::discover_packages;
pub use matcher::{affected_packages, normalize_path};

/// A package in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    /// Directory of the package, relative to the workspace root.
    pub location: PathBuf,
}

impl Package {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}
