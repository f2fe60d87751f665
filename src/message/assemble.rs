//! Final commit message assembly from collected answers.

use crate::config::Options;
use crate::flow::Answers;

use super::subject::{normalize_subject, render_scope};
use super::wrap::wrap_text;

/// Marker that opens the breaking-change section.
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE:";

/// Format the `type(scope): subject` header line.
pub fn format_header(commit_type: &str, scope: &[String], subject: &str) -> String {
    match render_scope(scope) {
        Some(scope) => format!("{}({}): {}", commit_type, scope, subject),
        None => format!("{}: {}", commit_type, subject),
    }
}

/// The `affects: a, b` annotation for the selected packages.
pub fn affects_line(scope: &[String]) -> Option<String> {
    if scope.is_empty() {
        None
    } else {
        Some(format!("affects: {}", scope.join(", ")))
    }
}

/// Prefix breaking-change text with the marker exactly once.
///
/// Returns `None` when nothing but the marker (or nothing at all) was given.
pub fn breaking_change_text(breaking: &str) -> Option<String> {
    let mut text = breaking.trim();
    while let Some(rest) = text.strip_prefix(BREAKING_CHANGE_MARKER) {
        text = rest.trim_start();
    }

    if text.is_empty() {
        None
    } else {
        Some(format!("{} {}", BREAKING_CHANGE_MARKER, text))
    }
}

/// Assemble the commit message.
///
/// Sections, in order: header, body, breaking change, issues. Empty sections
/// are dropped and the rest are separated by a blank line. A non-empty body is
/// led by the affects line; without a body the scope in the header is the only
/// package annotation. The header is never wrapped; the other sections are
/// wrapped to `options.max_line_width`.
pub fn assemble(answers: &Answers, options: &Options) -> String {
    let width = options.max_line_width;

    let subject = normalize_subject(
        answers.subject.as_deref().unwrap_or_default(),
        options.disable_subject_lower_case,
    );
    let header = format_header(
        answers.commit_type.as_deref().unwrap_or_default(),
        &answers.scope,
        &subject,
    );

    let body = answers
        .effective_body()
        .map(|body| match affects_line(&answers.scope) {
            Some(affects) => format!("{}\n{}", affects, body),
            None => body.to_string(),
        })
        .and_then(|body| wrap_text(&body, width));

    let breaking = answers
        .breaking
        .as_deref()
        .and_then(breaking_change_text)
        .and_then(|text| wrap_text(&text, width));

    let issues = answers
        .issues
        .as_deref()
        .and_then(|issues| wrap_text(issues, width));

    [Some(header), body, breaking, issues]
        .into_iter()
        .flatten()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
