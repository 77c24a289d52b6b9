//! Text rules every item sentence must satisfy.
//!
//! An item is one ESL-friendly sentence: at most [`ESL_MAX_WORDS`] words,
//! plain ASCII from a fixed character set, and exactly one sentence-ending
//! mark which closes the text. Generators run these rules on what they render
//! and the validator runs them on whatever it loads.

use thiserror::Error;

/// Default upper bound on whitespace-separated words per sentence.
pub const ESL_MAX_WORDS: usize = 25;

/// Characters that end a sentence.
pub const SENTENCE_ENDINGS: [char; 3] = ['.', '?', '!'];

/// Punctuation allowed in item text besides letters, digits and space.
pub const ALLOWED_PUNCTUATION: &str = ",.;:'\"+-!?=()";

/// A broken text rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextViolation {
    /// Zero or several sentence-ending marks, or the only one is not last.
    #[error("not a single sentence ({endings} sentence-ending marks)")]
    NotSingleSentence { endings: usize },

    #[error("{words} words exceeds the ESL limit of {max}")]
    TooLong { words: usize, max: usize },

    #[error("unsupported character {0:?}")]
    DisallowedCharacter(char),
}

/// Count `.`, `?` and `!` anywhere in the text.
pub fn count_sentence_endings(text: &str) -> usize {
    text.chars().filter(|c| SENTENCE_ENDINGS.contains(c)).count()
}

/// Exactly one sentence-ending mark, and the text ends with it.
pub fn is_single_sentence(text: &str) -> bool {
    count_sentence_endings(text) == 1 && text.trim_end().ends_with(&SENTENCE_ENDINGS[..])
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn is_esl_friendly_length(text: &str, max_words: usize) -> bool {
    word_count(text) <= max_words
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || ALLOWED_PUNCTUATION.contains(c)
}

/// Every character is ASCII and drawn from the allowed set.
pub fn has_allowed_characters(text: &str) -> bool {
    text.chars().all(is_allowed_char)
}

/// Collect every rule the (trimmed) text breaks, in a stable order.
pub fn text_violations(text: &str, max_words: usize) -> Vec<TextViolation> {
    let text = text.trim();
    let mut violations = Vec::new();

    if !is_single_sentence(text) {
        violations.push(TextViolation::NotSingleSentence {
            endings: count_sentence_endings(text),
        });
    }

    let words = word_count(text);
    if words > max_words {
        violations.push(TextViolation::TooLong {
            words,
            max: max_words,
        });
    }

    if let Some(c) = text.chars().find(|&c| !is_allowed_char(c)) {
        violations.push(TextViolation::DisallowedCharacter(c));
    }

    violations
}

/// Check the text against all rules, reporting the first violation.
pub fn check_text(text: &str, max_words: usize) -> Result<(), TextViolation> {
    match text_violations(text, max_words).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}
