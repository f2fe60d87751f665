//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;

use git2::{Oid, Repository, Signature};

use czmono::PromptError;
use czmono::flow::{Prompter, TextQuestion};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");

        Self { dir, repo }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the repository root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        std::fs::create_dir_all(path.parent().expect("path has a parent"))
            .expect("Failed to create directories");
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, relative: &str, content: &str) {
        self.write(relative, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(relative)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever the index holds. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Message of the commit `HEAD` points to.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("HEAD has a commit")
            .message()
            .unwrap_or_default()
            .to_string()
    }
}

/// One canned reply for a [`ScriptedPrompter`].
#[derive(Debug, Clone)]
pub enum Reply {
    Select(usize),
    Multi(Vec<usize>),
    Text(&'static str),
    Confirm(bool),
}

/// A prompter that replays canned replies in order.
///
/// An empty text reply takes the question's default, like pressing enter.
/// A reply the question's validator rejects is recorded and the question is
/// asked again with the next reply, as dialoguer does.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub prompts: Vec<String>,
    pub multi_defaults: Vec<Vec<bool>>,
    pub text_defaults: Vec<Option<String>>,
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            ..Default::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.replies.is_empty()
    }

    fn next(&mut self, prompt: &str) -> Reply {
        self.prompts.push(prompt.to_string());
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("No scripted reply for prompt: {}", prompt))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, _items: &[String], _default: usize) -> Result<usize, PromptError> {
        match self.next(prompt) {
            Reply::Select(index) => Ok(index),
            other => panic!("Expected select reply for {:?}, got {:?}", prompt, other),
        }
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        _items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError> {
        self.multi_defaults.push(defaults.to_vec());
        match self.next(prompt) {
            Reply::Multi(indices) => Ok(indices),
            other => panic!("Expected multi-select reply for {:?}, got {:?}", prompt, other),
        }
    }

    fn input(&mut self, question: &TextQuestion<'_>) -> Result<String, PromptError> {
        self.text_defaults.push(question.default.map(str::to_string));
        loop {
            let text = match self.next(question.prompt) {
                Reply::Text(text) => text,
                other => panic!("Expected text reply for {:?}, got {:?}", question.prompt, other),
            };
            let text = match (text, question.default) {
                ("", Some(default)) => default,
                (text, _) => text,
            };
            match question.validate.map(|validate| validate(text)) {
                Some(Err(message)) => self.rejections.push(message),
                _ => return Ok(text.to_string()),
            }
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(prompt) {
            Reply::Confirm(value) => Ok(value),
            other => panic!("Expected confirm reply for {:?}, got {:?}", prompt, other),
        }
    }
}
