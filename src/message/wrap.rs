//! Word wrapping for free-form message sections.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// Wrap `text` to `width` columns.
///
/// Words are never cut: a word longer than `width` gets a line of its own.
/// Only spaces separate words, so hyphenated words, paths, and URLs stay
/// whole. Blank lines between paragraphs are kept. Returns `None` for empty
/// or whitespace-only input so callers can drop the section entirely.
pub fn wrap_text(text: &str, width: usize) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let options = Options::new(width.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    let lines: Vec<String> = textwrap::wrap(text, &options)
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();

    let wrapped = lines.join("\n");
    let wrapped = wrapped.trim_matches('\n');

    if wrapped.is_empty() {
        None
    } else {
        Some(wrapped.to_string())
    }
}
