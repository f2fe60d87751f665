//! Workspace package discovery from lerna, npm/yarn, and Cargo manifests.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::PackageError;

use super::Package;

const LERNA_JSON: &str = "lerna.json";
const PACKAGE_JSON: &str = "package.json";
const CARGO_TOML: &str = "Cargo.toml";

/// Used when `lerna.json` exists but lists no packages.
const LERNA_DEFAULT_PACKAGES: &str = "packages/*";

/// Directories never descended into while matching workspace globs.
const SKIP_DIRS: &[&str] = &["node_modules", "target", ".git"];

#[derive(Debug, Deserialize)]
struct LernaConfig {
    #[serde(default)]
    packages: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Workspaces {
    List(Vec<String>),
    Object {
        #[serde(default)]
        packages: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
struct NodeManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    workspaces: Option<Workspaces>,
}

/// Find the packages of the workspace rooted at `root`.
///
/// The first manifest that declares a workspace wins: `lerna.json`, then
/// `package.json` workspaces, then a Cargo `[workspace]`. A root without any
/// of them has no packages. Results are sorted by location.
pub fn discover_packages(root: &Path) -> Result<Vec<Package>, PackageError> {
    let Some(patterns) = workspace_patterns(root)? else {
        debug!(root = %root.display(), "No workspace manifest found");
        return Ok(Vec::new());
    };

    debug!(?patterns, "Resolving workspace patterns");
    let packages = find_packages(root, &patterns)?;
    debug!(count = packages.len(), "Discovered workspace packages");
    Ok(packages)
}

/// Package globs declared at the workspace root, if any manifest declares them.
fn workspace_patterns(root: &Path) -> Result<Option<Vec<String>>, PackageError> {
    let lerna_path = root.join(LERNA_JSON);
    if let Some(content) = read_optional(&lerna_path)? {
        let config: LernaConfig = parse_json(&lerna_path, &content)?;
        let patterns = config
            .packages
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| vec![LERNA_DEFAULT_PACKAGES.to_string()]);
        return Ok(Some(patterns));
    }

    let package_json_path = root.join(PACKAGE_JSON);
    if let Some(content) = read_optional(&package_json_path)? {
        let manifest: NodeManifest = parse_json(&package_json_path, &content)?;
        match manifest.workspaces {
            Some(Workspaces::List(patterns)) | Some(Workspaces::Object { packages: patterns }) => {
                return Ok(Some(patterns));
            }
            None => {}
        }
    }

    let cargo_path = root.join(CARGO_TOML);
    if let Some(content) = read_optional(&cargo_path)? {
        let doc = parse_toml(&cargo_path, &content)?;
        if let Some(workspace) = doc.get("workspace") {
            let members = workspace
                .get("members")
                .and_then(|m| m.as_array())
                .map(|members| {
                    members
                        .iter()
                        .filter_map(|m| m.as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            return Ok(Some(members));
        }
    }

    Ok(None)
}

/// Walk `root` for directories matching `patterns` that hold a named manifest.
fn find_packages(root: &Path, patterns: &[String]) -> Result<Vec<Package>, PackageError> {
    let patterns: Vec<&str> = patterns
        .iter()
        .map(|p| p.trim().trim_start_matches("./").trim_end_matches('/'))
        .filter(|p| {
            if p.starts_with('!') {
                debug!(pattern = p, "Ignoring negated workspace pattern");
                return false;
            }
            !p.is_empty()
        })
        .collect();

    if patterns.is_empty() {
        return Ok(Vec::new());
    }

    let globs = build_globset(&patterns)?;
    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if let Some(depth) = max_depth(&patterns) {
        walker = walker.max_depth(depth);
    }

    let mut packages = Vec::new();
    for entry in walker.into_iter().filter_entry(|e| !is_skipped(e)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(PackageError::WalkFailed(e)),
            Err(e) => {
                warn!("Skipping unreadable path during package discovery: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if !globs.is_match(relative) {
            continue;
        }

        match package_name(entry.path())? {
            Some(name) => packages.push(Package::new(name, relative.to_path_buf())),
            None => debug!(path = %relative.display(), "Matched directory has no named manifest"),
        }
    }

    packages.sort_by(|a, b| a.location.cmp(&b.location));
    Ok(packages)
}

fn build_globset(patterns: &[&str]) -> Result<GlobSet, PackageError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| PackageError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| PackageError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Deepest directory any pattern can match, or `None` when a `**` makes it
/// unbounded.
fn max_depth(patterns: &[&str]) -> Option<usize> {
    if patterns.iter().any(|p| p.contains("**")) {
        return None;
    }
    patterns.iter().map(|p| p.split('/').count()).max()
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRS.contains(&name))
}

/// Name declared by the package manifest in `dir`: `package.json` first, then
/// the Cargo `[package]` table.
fn package_name(dir: &Path) -> Result<Option<String>, PackageError> {
    let package_json_path = dir.join(PACKAGE_JSON);
    if let Some(content) = read_optional(&package_json_path)? {
        let manifest: NodeManifest = parse_json(&package_json_path, &content)?;
        if let Some(name) = manifest.name.filter(|n| !n.trim().is_empty()) {
            return Ok(Some(name));
        }
    }

    let cargo_path = dir.join(CARGO_TOML);
    if let Some(content) = read_optional(&cargo_path)? {
        let doc = parse_toml(&cargo_path, &content)?;
        let name = doc
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .map(str::to_string);
        return Ok(name);
    }

    Ok(None)
}

fn read_optional(path: &Path) -> Result<Option<String>, PackageError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(PackageError::ReadFailed {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_json<T: for<'de> Deserialize<'de>>(path: &Path, content: &str) -> Result<T, PackageError> {
    serde_json::from_str(content).map_err(|source| PackageError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(path: &Path, content: &str) -> Result<toml_edit::DocumentMut, PackageError> {
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|source| PackageError::InvalidToml {
            path: PathBuf::from(path),
            source,
        })
}
