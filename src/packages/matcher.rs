//! Match changed file paths to the packages that contain them.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::Package;

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. The filesystem is never consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Express `path` relative to `root`, both lexically normalized.
///
/// Relative inputs are taken to be relative to `root` already. Absolute paths
/// outside `root` are returned normalized but otherwise unchanged.
fn relative_to(path: &Path, root: &Path) -> PathBuf {
    let path = normalize_path(path);
    if !path.is_absolute() {
        return path;
    }

    let root = normalize_path(root);
    match path.strip_prefix(&root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path,
    }
}

/// Names of the packages touched by `changed`, in package-list order.
///
/// A package is touched when a changed path lies strictly inside its
/// directory, compared component by component. A package located at the
/// workspace root contains everything and is never reported.
pub fn affected_packages(changed: &[String], packages: &[Package], root: &Path) -> Vec<String> {
    let changed: Vec<PathBuf> = changed
        .iter()
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(|raw| relative_to(Path::new(&raw.replace('\\', "/")), root))
        .filter(|path| path.components().next().is_some())
        .collect();

    packages
        .iter()
        .filter(|package| {
            let location = relative_to(&package.location, root);
            if location.components().next().is_none() {
                debug!(package = %package.name, "Package at workspace root, not matching");
                return false;
            }
            changed
                .iter()
                .any(|path| path.starts_with(&location) && path != &location)
        })
        .map(|package| package.name.clone())
        .collect()
}
