//! Guarded regex replacement
//!
//! The `regex` crate runs in linear time and has no look-around. Rules that
//! need "not preceded by a word character" style context run through
//! [`replace_guarded`], which tests each candidate match against its
//! surroundings. A rejected match is copied through unchanged and the search
//! resumes after it, so each byte is scanned once.

use regex::{Captures, Regex, RegexBuilder};
use tracing::warn;

/// Unicode word character, matching `\w`
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Character immediately before byte offset `at`
pub(crate) fn char_before(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

/// Character starting at byte offset `at`
pub(crate) fn char_after(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}

/// True when `start..end` is not glued to word characters on either side
pub(crate) fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    !char_before(text, start).is_some_and(is_word_char)
        && !char_after(text, end).is_some_and(is_word_char)
}

/// True when `start` is not preceded by a word character
pub(crate) fn starts_word(text: &str, start: usize, _end: usize) -> bool {
    !char_before(text, start).is_some_and(is_word_char)
}

/// Replace every match of `re` accepted by `accept(text, start, end)`
pub(crate) fn replace_guarded<A, F>(text: &str, re: &Regex, accept: A, mut rewrite: F) -> String
where
    A: Fn(&str, usize, usize) -> bool,
    F: FnMut(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if accept(text, whole.start(), whole.end()) {
            out.push_str(&text[copied..whole.start()]);
            out.push_str(&rewrite(&caps));
            copied = whole.end();
            pos = if whole.is_empty() {
                next_boundary(text, whole.end())
            } else {
                whole.end()
            };
        } else if whole.is_empty() {
            pos = next_boundary(text, whole.start());
        } else {
            pos = whole.end();
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Byte offset of the character after `at`, or past the end
fn next_boundary(text: &str, at: usize) -> usize {
    char_after(text, at).map_or(text.len() + 1, |c| at + c.len_utf8())
}

/// Case-insensitive whole-word literal substitution
#[derive(Debug, Clone)]
pub(crate) struct LiteralRule {
    pattern: Regex,
    replacement: String,
}

impl LiteralRule {
    /// Build a rule for `key`; returns `None` for an empty key or a key the
    /// regex engine refuses
    pub(crate) fn new(key: &str, replacement: &str) -> Option<Self> {
        if key.trim().is_empty() {
            return None;
        }
        match RegexBuilder::new(&regex::escape(key))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self {
                pattern,
                replacement: replacement.to_string(),
            }),
            Err(e) => {
                warn!(key, error = %e, "skipping literal rule");
                None
            }
        }
    }

    pub(crate) fn apply(&self, text: &str) -> String {
        replace_guarded(text, &self.pattern, is_whole_word, |_| {
            self.replacement.clone()
        })
    }
}
