//! Commit message text processing: subject rules, wrapping, assembly.

pub mod assemble;
pub mod subject;
pub mod wrap;

pub use assemble::{BREAKING_CHANGE_MARKER, affects_line, assemble, breaking_change_text, format_header};
pub use subject::{
    SubjectGauge, header_length, max_summary_length, normalize_subject,
    render_scope, subject_gauge, validate_subject,
};
pub use wrap::wrap_text;
