//! Git operations using git2-rs.

pub mod commit;
pub mod staged;

pub use commit::{commit_index, write_message_file};
pub use staged::{ChangeSource, GitIndexChangeSource, changed_paths_or_empty};
