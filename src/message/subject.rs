//! Subject normalization and header-budget validation.

use tracing::warn;

use crate::error::SubjectError;

/// Normalize a commit subject.
///
/// Trims surrounding whitespace, lowercases the first character unless
/// `lowercase_disabled` is set, and strips every trailing period. Whitespace
/// left between stripped periods goes with them, so the result is stable
/// under repeated normalization.
pub fn normalize_subject(subject: &str, lowercase_disabled: bool) -> String {
    let mut subject = subject.trim().to_string();

    if !lowercase_disabled {
        if let Some(first) = subject.chars().next() {
            if !first.is_lowercase() {
                let lowered: String = first.to_lowercase().collect();
                subject.replace_range(..first.len_utf8(), &lowered);
            }
        }
    }

    let trimmed_len = subject
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .len();
    subject.truncate(trimmed_len);
    subject
}

/// Render the scope list the way it appears inside the header parentheses.
pub fn render_scope(scope: &[String]) -> Option<String> {
    if scope.is_empty() {
        None
    } else {
        Some(scope.join(","))
    }
}

/// Width of the header before the subject: `type(scope): `.
pub fn header_length(commit_type: &str, scope: &[String]) -> usize {
    let scope_len = render_scope(scope).map_or(0, |s| s.chars().count() + 2);
    commit_type.chars().count() + 2 + scope_len
}

/// Characters left for the subject once the header prefix is accounted for.
///
/// Saturates at zero when the type and scope alone exceed the header width.
pub fn max_summary_length(max_header_width: usize, commit_type: &str, scope: &[String]) -> usize {
    let used = header_length(commit_type, scope);
    if used > max_header_width {
        warn!(
            "Header prefix is {} characters, exceeding the {} character limit; no room for a subject",
            used, max_header_width
        );
    }
    max_header_width.saturating_sub(used)
}

/// Validate a raw subject against the remaining header budget.
///
/// The subject is normalized first, so the check applies to what will
/// actually be committed.
pub fn validate_subject(
    subject: &str,
    lowercase_disabled: bool,
    max_length: usize,
) -> Result<(), SubjectError> {
    let normalized = normalize_subject(subject, lowercase_disabled);
    let len = normalized.chars().count();

    if len == 0 {
        Err(SubjectError::Required)
    } else if len > max_length {
        Err(SubjectError::TooLong {
            max: max_length,
            len,
        })
    } else {
        Ok(())
    }
}

/// Length display for a subject: `(n) subject`, plus whether it fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectGauge {
    pub display: String,
    pub fits: bool,
}

/// Measure a raw subject the way it will be committed.
pub fn subject_gauge(subject: &str, lowercase_disabled: bool, max_length: usize) -> SubjectGauge {
    let len = normalize_subject(subject, lowercase_disabled).chars().count();
    SubjectGauge {
        display: format!("({}) {}", len, subject),
        fits: len <= max_length,
    }
}
