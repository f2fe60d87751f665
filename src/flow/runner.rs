//! Drives the question flow to completion.

use tracing::debug;

use crate::config::Options;
use crate::error::PromptError;
use crate::message::{normalize_subject, subject_gauge, validate_subject};

use super::answers::{Answers, REQUIRED_BODY_DEFAULT};
use super::prompter::{Prompter, TextQuestion};
use super::questions::{CommitType, QUESTION_ORDER, QuestionId, ScopeChoices, prompt_text, visible};

const BREAKING_BODY_REQUIRED: &str = "Body is required for BREAKING CHANGE";

/// Ask every visible question in order and return the collected answers.
///
/// Visibility is re-evaluated before each question against the answers
/// collected so far. The subject is stored normalized.
pub fn run_flow<P>(
    prompter: &mut P,
    options: &Options,
    choices: &ScopeChoices,
) -> Result<Answers, PromptError>
where
    P: Prompter + ?Sized,
{
    let mut answers = Answers::default();

    for id in QUESTION_ORDER {
        if !visible(id, &answers) {
            debug!(question = id.name(), "Skipping hidden question");
            continue;
        }

        let prompt = prompt_text(id, options, choices, &answers);
        ask(id, &prompt, prompter, options, choices, &mut answers)?;
    }

    debug!(?answers, "Question flow complete");
    Ok(answers)
}

fn ask<P>(
    id: QuestionId,
    prompt: &str,
    prompter: &mut P,
    options: &Options,
    choices: &ScopeChoices,
    answers: &mut Answers,
) -> Result<(), PromptError>
where
    P: Prompter + ?Sized,
{
    match id {
        QuestionId::Type => {
            let labels: Vec<String> = CommitType::ALL.iter().map(CommitType::label).collect();
            let index = prompter.select(prompt, &labels, 0)?;
            let commit_type = CommitType::ALL
                .get(index)
                .ok_or(PromptError::MissingType)?;
            answers.commit_type = Some(commit_type.as_str().to_string());
        }
        QuestionId::Scope => {
            if choices.all.is_empty() {
                debug!("No workspace packages found, leaving scope empty");
                return Ok(());
            }
            let picked = prompter.multi_select(prompt, &choices.all, &choices.defaults())?;
            answers.scope = picked
                .into_iter()
                .filter_map(|index| choices.all.get(index).cloned())
                .collect();
        }
        QuestionId::Subject => {
            let lowercase_disabled = options.disable_subject_lower_case;
            let budget = answers.subject_budget(options);
            let check = move |value: &str| {
                validate_subject(value, lowercase_disabled, budget).map_err(|e| e.to_string())
            };
            let question = TextQuestion::new(prompt)
                .with_default(options.default_subject.as_deref())
                .with_validator(&check);

            let raw = prompter.input(&question)?;
            let gauge = subject_gauge(&raw, lowercase_disabled, budget);
            debug!(subject = %gauge.display, fits = gauge.fits, "Subject accepted");
            answers.subject = Some(normalize_subject(&raw, lowercase_disabled));
        }
        QuestionId::Body => {
            let question = TextQuestion::new(prompt).with_default(options.default_body.as_deref());
            answers.body = Some(prompter.input(&question)?);
        }
        QuestionId::IsBreaking => {
            answers.is_breaking = Some(prompter.confirm(prompt, false)?);
        }
        QuestionId::BreakingBody => {
            let check = |value: &str| {
                if value.trim().is_empty() {
                    Err(BREAKING_BODY_REQUIRED.to_string())
                } else {
                    Ok(())
                }
            };
            let question = TextQuestion::new(prompt)
                .with_default(Some(REQUIRED_BODY_DEFAULT))
                .with_validator(&check);
            answers.breaking_body = Some(prompter.input(&question)?);
        }
        QuestionId::Breaking => {
            answers.breaking = Some(prompter.input(&TextQuestion::new(prompt))?);
        }
        QuestionId::IsIssueAffected => {
            let default = options.default_issues.is_some();
            answers.is_issue_affected = Some(prompter.confirm(prompt, default)?);
        }
        QuestionId::IssuesBody => {
            let question = TextQuestion::new(prompt).with_default(Some(REQUIRED_BODY_DEFAULT));
            answers.issues_body = Some(prompter.input(&question)?);
        }
        QuestionId::Issues => {
            let question =
                TextQuestion::new(prompt).with_default(options.default_issues.as_deref());
            answers.issues = Some(prompter.input(&question)?);
        }
    }

    Ok(())
}

