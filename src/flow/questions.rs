//! The question catalog: order, visibility, and prompt text.
//!
//! Everything here is a pure function of the options, the package choices,
//! and the answers gathered so far.

use crate::config::Options;

use super::answers::Answers;

/// Commit types offered by the type question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Fix,
    Feat,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Revert,
    Wip,
}

impl CommitType {
    /// All types, in the order they are offered.
    pub const ALL: [CommitType; 10] = [
        CommitType::Fix,
        CommitType::Feat,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Revert,
        CommitType::Wip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Fix => "fix",
            CommitType::Feat => "feat",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
            CommitType::Wip => "WIP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Fix => "Bug fix (note: indicates a minor release)",
            CommitType::Feat => "Feature (note: indicates a major release)",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests",
            CommitType::Chore => "Changes to the build process or auxiliary tools",
            CommitType::Revert => "Revert to a commit",
            CommitType::Wip => "Work in progress",
        }
    }

    /// Menu label: the type padded to a column, then its description.
    pub fn label(&self) -> String {
        format!("{:<10}{}", format!("{}:", self.as_str()), self.description())
    }
}

/// Package names offered by the scope question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeChoices {
    /// Every package in the workspace.
    pub all: Vec<String>,
    /// Packages touched by the staged changes; preselected.
    pub changed: Vec<String>,
}

impl ScopeChoices {
    /// Preselection flags aligned with `all`.
    pub fn defaults(&self) -> Vec<bool> {
        self.all
            .iter()
            .map(|name| self.changed.contains(name))
            .collect()
    }
}

/// Questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    Type,
    Scope,
    Subject,
    Body,
    IsBreaking,
    BreakingBody,
    Breaking,
    IsIssueAffected,
    IssuesBody,
    Issues,
}

pub const QUESTION_ORDER: [QuestionId; 10] = [
    QuestionId::Type,
    QuestionId::Scope,
    QuestionId::Subject,
    QuestionId::Body,
    QuestionId::IsBreaking,
    QuestionId::BreakingBody,
    QuestionId::Breaking,
    QuestionId::IsIssueAffected,
    QuestionId::IssuesBody,
    QuestionId::Issues,
];

impl QuestionId {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionId::Type => "type",
            QuestionId::Scope => "scope",
            QuestionId::Subject => "subject",
            QuestionId::Body => "body",
            QuestionId::IsBreaking => "isBreaking",
            QuestionId::BreakingBody => "breakingBody",
            QuestionId::Breaking => "breaking",
            QuestionId::IsIssueAffected => "isIssueAffected",
            QuestionId::IssuesBody => "issuesBody",
            QuestionId::Issues => "issues",
        }
    }
}

/// Whether a question should be asked given the answers so far.
pub fn visible(id: QuestionId, answers: &Answers) -> bool {
    match id {
        QuestionId::BreakingBody => answers.is_breaking() && !answers.has_body(),
        QuestionId::Breaking => answers.is_breaking(),
        QuestionId::IssuesBody => {
            answers.is_issue_affected() && !answers.has_body() && !answers.has_breaking_body()
        }
        QuestionId::Issues => answers.is_issue_affected(),
        QuestionId::Type
        | QuestionId::Scope
        | QuestionId::Subject
        | QuestionId::Body
        | QuestionId::IsBreaking
        | QuestionId::IsIssueAffected => true,
    }
}

/// Prompt text for a question.
pub fn prompt_text(
    id: QuestionId,
    options: &Options,
    choices: &ScopeChoices,
    answers: &Answers,
) -> String {
    match id {
        QuestionId::Type => "Select the type of change that you're committing:".to_string(),
        QuestionId::Scope => format!(
            "The packages that this commit has affected ({} detected)",
            choices.all.len()
        ),
        QuestionId::Subject => format!(
            "Write a short, imperative tense description of the change (max {} chars):",
            answers.subject_budget(options)
        ),
        QuestionId::Body => {
            "Provide a longer description of the change: (press enter to skip)".to_string()
        }
        QuestionId::IsBreaking => "Are there any breaking changes?".to_string(),
        QuestionId::BreakingBody => "A BREAKING CHANGE commit requires a body. \
             Please enter a longer description of the commit itself:"
            .to_string(),
        QuestionId::Breaking => "Describe the breaking changes:".to_string(),
        QuestionId::IsIssueAffected => "Does this change affect any open issues?".to_string(),
        QuestionId::IssuesBody => "If issues are closed, the commit requires a body. \
             Please enter a longer description of the commit itself:"
            .to_string(),
        QuestionId::Issues => {
            "Add issue references (e.g. \"fix #123\", \"re #123\".):".to_string()
        }
    }
}
