//! The answers accumulated while the question flow runs.

use crate::config::Options;
use crate::message::max_summary_length;

/// Answers collected so far, one field per question.
///
/// `None` means the question has not been asked (or was hidden).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub commit_type: Option<String>,
    pub scope: Vec<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub is_breaking: Option<bool>,
    pub breaking_body: Option<String>,
    pub breaking: Option<String>,
    pub is_issue_affected: Option<bool>,
    pub issues_body: Option<String>,
    pub issues: Option<String>,
}

/// Default answer for the body questions a breaking change or closed issue forces.
pub const REQUIRED_BODY_DEFAULT: &str = "-";

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A forced body, unless it is still the `-` placeholder.
fn required_body(value: &Option<String>) -> Option<&str> {
    non_blank(value).filter(|v| v.trim() != REQUIRED_BODY_DEFAULT)
}

impl Answers {
    pub fn has_body(&self) -> bool {
        non_blank(&self.body).is_some()
    }

    pub fn has_breaking_body(&self) -> bool {
        non_blank(&self.breaking_body).is_some()
    }

    pub fn is_breaking(&self) -> bool {
        self.is_breaking.unwrap_or(false)
    }

    pub fn is_issue_affected(&self) -> bool {
        self.is_issue_affected.unwrap_or(false)
    }

    /// The body to commit: the body answer, or the body collected because a
    /// breaking change or closed issue required one. A forced body left at
    /// the `-` placeholder counts as no body.
    pub fn effective_body(&self) -> Option<&str> {
        non_blank(&self.body)
            .or_else(|| required_body(&self.breaking_body))
            .or_else(|| required_body(&self.issues_body))
    }

    /// Characters available to the subject given the type and scope so far.
    pub fn subject_budget(&self, options: &Options) -> usize {
        max_summary_length(
            options.max_header_width,
            self.commit_type.as_deref().unwrap_or_default(),
            &self.scope,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_body_is_not_a_body() {
        let answers = Answers {
            body: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!answers.has_body());
        assert_eq!(answers.effective_body(), None);
    }

    #[test]
    fn test_effective_body_prefers_body() {
        let answers = Answers {
            body: Some("main body".to_string()),
            breaking_body: Some("breaking body".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.effective_body(), Some("main body"));
    }

    #[test]
    fn test_effective_body_fallback_order() {
        let answers = Answers {
            breaking_body: Some("breaking body".to_string()),
            issues_body: Some("issues body".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.effective_body(), Some("breaking body"));

        let answers = Answers {
            issues_body: Some("issues body".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.effective_body(), Some("issues body"));
    }

    #[test]
    fn test_placeholder_forced_body_is_not_a_body() {
        let answers = Answers {
            body: Some(String::new()),
            breaking_body: Some(REQUIRED_BODY_DEFAULT.to_string()),
            issues_body: Some(" - ".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.effective_body(), None);

        let answers = Answers {
            breaking_body: Some("-".to_string()),
            issues_body: Some("Explained here.".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.effective_body(), Some("Explained here."));
    }

    #[test]
    fn test_unanswered_confirmations_are_false() {
        let answers = Answers::default();
        assert!(!answers.is_breaking());
        assert!(!answers.is_issue_affected());
    }

    #[test]
    fn test_subject_budget_uses_type_and_scope() {
        let answers = Answers {
            commit_type: Some("fix".to_string()),
            scope: vec!["core".to_string()],
            ..Default::default()
        };
        assert_eq!(answers.subject_budget(&Options::default()), 89);
    }
}
