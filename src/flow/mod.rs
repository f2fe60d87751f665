//! The interactive question flow.
//!
//! Questions are asked in a fixed order. Some are only shown when earlier
//! answers call for them: the breaking-change details after a breaking change
//! is confirmed, the issue references after issues are confirmed, and a
//! required body when neither of those paths already collected one.

pub mod answers;
pub mod prompter;
pub mod questions;
pub mod runner;

pub use answers::{Answers, REQUIRED_BODY_DEFAULT};
pub use prompter::{DialoguerPrompter, Prompter, TextQuestion, Validator};
pub use questions::{CommitType, QUESTION_ORDER, QuestionId, ScopeChoices, prompt_text, visible};
pub use runner::run_flow;
