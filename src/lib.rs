//! czmono - An interactive conventional-commit prompt for multi-package repositories.
//!
//! # Overview
//!
//! czmono asks a fixed sequence of questions, normalizes and validates the
//! answers against the header width budget, and assembles a conventional
//! commit message whose scope and `affects:` line name the workspace packages
//! touched by the staged changes.

pub mod config;
pub mod error;
pub mod flow;
pub mod git;
pub mod message;
pub mod packages;

// Re-export commonly used types
pub use config::Options;
pub use error::{ChangeQueryError, CommitError, PackageError, PromptError, SubjectError};
pub use flow::{Answers, Prompter, ScopeChoices, run_flow};
pub use message::assemble;
pub use packages::Package;
