//! Terminal prompt abstraction.
//!
//! The question flow talks to a [`Prompter`] so tests can script answers
//! while the binary uses dialoguer.

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::PromptError;

/// Validation hook for free-text answers; `Err` carries the message to show.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// A free-text question.
pub struct TextQuestion<'a> {
    pub prompt: &'a str,
    pub default: Option<&'a str>,
    pub validate: Option<Validator<'a>>,
}

impl<'a> TextQuestion<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            default: None,
            validate: None,
        }
    }

    pub fn with_default(mut self, default: Option<&'a str>) -> Self {
        self.default = default;
        self
    }

    pub fn with_validator(mut self, validate: Validator<'a>) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// Asks one question at a time and returns the raw answer.
pub trait Prompter {
    /// Single choice; returns the selected index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize)
    -> Result<usize, PromptError>;

    /// Multiple choice; returns the selected indices in item order.
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError>;

    /// Free text. An empty answer falls back to the default when one is set.
    fn input(&mut self, question: &TextQuestion<'_>) -> Result<String, PromptError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Interactive prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, PromptError> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }

    fn input(&mut self, question: &TextQuestion<'_>) -> Result<String, PromptError> {
        let mut input = Input::<String>::new()
            .with_prompt(question.prompt)
            .allow_empty(true);

        if let Some(default) = question.default {
            input = input.default(default.to_string());
        }

        if let Some(validate) = question.validate {
            input = input.validate_with(move |value: &String| -> Result<(), String> {
                validate(value.as_str())
            });
        }

        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }
}
