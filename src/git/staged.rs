//! Paths staged in the git index.

use git2::{ErrorCode, Repository, Tree};
use tracing::{debug, warn};

use crate::error::ChangeQueryError;

/// Source of the paths a commit would change.
///
/// This abstraction allows faking the repository in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ChangeSource {
    /// Paths staged for commit, relative to the repository root.
    fn staged_paths(&self) -> Result<Vec<String>, ChangeQueryError>;
}

/// Reads staged paths by diffing `HEAD` against the index.
pub struct GitIndexChangeSource<'repo> {
    repo: &'repo Repository,
}

impl<'repo> GitIndexChangeSource<'repo> {
    pub fn new(repo: &'repo Repository) -> Self {
        Self { repo }
    }
}

impl ChangeSource for GitIndexChangeSource<'_> {
    fn staged_paths(&self) -> Result<Vec<String>, ChangeQueryError> {
        if self.repo.is_bare() {
            return Err(ChangeQueryError::BareRepository);
        }

        let head_tree = resolve_head_tree(self.repo).map_err(ChangeQueryError::DiffFailed)?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), None, None)
            .map_err(ChangeQueryError::DiffFailed)?;

        let mut paths: Vec<String> = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().to_string())
            })
            .filter(|p| !p.is_empty())
            .collect();
        paths.dedup();

        debug!(count = paths.len(), "Collected staged paths");
        Ok(paths)
    }
}

/// Resolve the HEAD tree; `None` for a repository without commits.
pub(crate) fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, git2::Error> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    head_ref.peel_to_tree().map(Some)
}

/// Staged paths, or an empty list when the query fails.
///
/// Package detection is a convenience; a failed query should not stop the
/// prompt, so the error is logged and nothing is preselected.
pub fn changed_paths_or_empty(source: &dyn ChangeSource) -> Vec<String> {
    match source.staged_paths() {
        Ok(paths) => paths,
        Err(e) => {
            warn!("Could not list staged files, no packages will be preselected: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use std::path::Path;

    fn init_repo() -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        (dir, repo)
    }

    fn stage(repo: &Repository, dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(relative)).unwrap();
        index.write().unwrap();
    }

    fn commit_index(repo: &Repository) {
        let sig = Signature::now("Test", "test@test.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &parents).unwrap();
    }

    #[test]
    fn test_unborn_head_lists_all_staged_files() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "packages/core/index.js", "module.exports = 1;\n");
        stage(&repo, dir.path(), "README.md", "# readme\n");

        let mut paths = GitIndexChangeSource::new(&repo).staged_paths().unwrap();
        paths.sort();
        assert_eq!(paths, vec!["README.md".to_string(), "packages/core/index.js".to_string()]);
    }

    #[test]
    fn test_only_staged_changes_are_listed() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "a.txt", "one\n");
        commit_index(&repo);

        stage(&repo, dir.path(), "pkgs/a/x.js", "x\n");
        std::fs::write(dir.path().join("unstaged.txt"), "not added\n").unwrap();

        let paths = GitIndexChangeSource::new(&repo).staged_paths().unwrap();
        assert_eq!(paths, vec!["pkgs/a/x.js".to_string()]);
    }

    #[test]
    fn test_deleted_file_reports_old_path() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "pkgs/a/gone.js", "bye\n");
        commit_index(&repo);

        let mut index = repo.index().unwrap();
        index.remove_path(Path::new("pkgs/a/gone.js")).unwrap();
        index.write().unwrap();

        let paths = GitIndexChangeSource::new(&repo).staged_paths().unwrap();
        assert_eq!(paths, vec!["pkgs/a/gone.js".to_string()]);
    }

    #[test]
    fn test_clean_index_has_no_paths() {
        let (dir, repo) = init_repo();
        stage(&repo, dir.path(), "a.txt", "one\n");
        commit_index(&repo);

        assert!(GitIndexChangeSource::new(&repo).staged_paths().unwrap().is_empty());
    }

    #[test]
    fn test_bare_repository_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init_bare(dir.path()).unwrap();

        let result = GitIndexChangeSource::new(&repo).staged_paths();
        assert!(matches!(result, Err(ChangeQueryError::BareRepository)));
    }

    #[test]
    fn test_changed_paths_or_empty_passes_paths_through() {
        let mut source = MockChangeSource::new();
        source
            .expect_staged_paths()
            .times(1)
            .returning(|| Ok(vec!["pkgs/a/x.js".to_string()]));

        assert_eq!(changed_paths_or_empty(&source), vec!["pkgs/a/x.js".to_string()]);
    }

    #[test]
    fn test_changed_paths_or_empty_degrades_on_error() {
        let mut source = MockChangeSource::new();
        source
            .expect_staged_paths()
            .times(1)
            .returning(|| Err(ChangeQueryError::BareRepository));

        assert!(changed_paths_or_empty(&source).is_empty());
    }
}
