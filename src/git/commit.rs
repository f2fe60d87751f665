//! Writing the assembled message: as a commit, or to a message file.

use std::io::Write;
use std::path::Path;

use git2::{Oid, Repository};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::CommitError;

use super::staged::resolve_head_tree;

/// Commit the current index on `HEAD` with `message`.
///
/// Unlike `git commit -a`, nothing is staged here: the commit records exactly
/// what the index holds. Fails with [`CommitError::NothingStaged`] when the
/// index matches `HEAD` (or is empty in a repository without commits).
pub fn commit_index(repo: &Repository, message: &str) -> Result<Oid, CommitError> {
    let mut index = repo.index().map_err(CommitError::IndexFailed)?;
    let tree_id = index.write_tree().map_err(CommitError::IndexFailed)?;

    let head_tree = resolve_head_tree(repo).map_err(CommitError::CommitFailed)?;
    let unchanged = match &head_tree {
        Some(tree) => tree.id() == tree_id,
        None => index.is_empty(),
    };
    if unchanged {
        return Err(CommitError::NothingStaged);
    }

    let tree = repo.find_tree(tree_id).map_err(CommitError::CommitFailed)?;

    // Signature from git config
    let sig = repo.signature().map_err(CommitError::ConfigError)?;

    let parent = match head_tree {
        Some(_) => Some(
            repo.head()
                .and_then(|h| h.peel_to_commit())
                .map_err(CommitError::CommitFailed)?,
        ),
        None => None,
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(CommitError::CommitFailed)?;

    info!(commit = %oid, "Created commit");
    Ok(oid)
}

/// Write `message` to `path` atomically, replacing any existing file.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over `path`, so a reader never sees a partial message.
pub fn write_message_file(path: &Path, message: &str) -> Result<(), CommitError> {
    let to_error = |source: std::io::Error| CommitError::WriteMessageFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(to_error)?;
    file.write_all(message.as_bytes()).map_err(to_error)?;
    if !message.ends_with('\n') {
        file.write_all(b"\n").map_err(to_error)?;
    }
    file.persist(path).map_err(|e| to_error(e.error))?;

    debug!(path = %path.display(), "Wrote commit message file");
    Ok(())
}
