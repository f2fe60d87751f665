//! Prompt options: defaults, environment overrides.
//!
//! The options are built once at startup and passed by reference into every
//! function that needs them. CLI flags are layered on top in `main.rs`.

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Default maximum width of the `type(scope): subject` header.
pub const DEFAULT_MAX_HEADER_WIDTH: usize = 100;

/// Default wrap width for body, breaking-change, and issues sections.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 50;

const MAX_HEADER_WIDTH_ENV_VAR: &str = "CZ_MAX_HEADER_WIDTH";
const MAX_LINE_WIDTH_ENV_VAR: &str = "CZ_MAX_LINE_WIDTH";
const DISABLE_LOWER_CASE_ENV_VAR: &str = "CZ_DISABLE_SUBJECT_LOWER_CASE";
const SUBJECT_ENV_VAR: &str = "CZ_SUBJECT";
const BODY_ENV_VAR: &str = "CZ_BODY";
const ISSUES_ENV_VAR: &str = "CZ_ISSUES";

/// Immutable prompt configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub max_header_width: usize,
    pub max_line_width: usize,
    pub disable_subject_lower_case: bool,
    pub default_subject: Option<String>,
    pub default_body: Option<String>,
    pub default_issues: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_header_width: DEFAULT_MAX_HEADER_WIDTH,
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            disable_subject_lower_case: false,
            default_subject: None,
            default_body: None,
            default_issues: None,
        }
    }
}

impl Options {
    /// Build options from defaults overridden by `CZ_*` environment variables.
    ///
    /// Invalid numeric or boolean values log a warning and keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_header_width: parse_env(MAX_HEADER_WIDTH_ENV_VAR, defaults.max_header_width),
            max_line_width: parse_env(MAX_LINE_WIDTH_ENV_VAR, defaults.max_line_width),
            disable_subject_lower_case: parse_env(
                DISABLE_LOWER_CASE_ENV_VAR,
                defaults.disable_subject_lower_case,
            ),
            default_subject: text_env(SUBJECT_ENV_VAR),
            default_body: text_env(BODY_ENV_VAR),
            default_issues: text_env(ISSUES_ENV_VAR),
        }
    }
}

fn parse_env<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => match v.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Invalid {} value '{}', using default {}", name, v, default);
                default
            }
        },
        _ => default,
    }
}

fn text_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
