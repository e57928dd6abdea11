//! Word-level rewrites: lists, notation, parentheticals, vocabulary, symbols
//! and acronyms

use super::pattern::{char_after, char_before, is_word_char, replace_guarded};
use super::speech::{spell_letters, split_camel};
use super::tags::TagPlaceholders;
use super::Normalizer;
use crate::config::ParenPolicy;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-*•]|[0-9]+[.)])\s+(.*)$").expect("valid bullet regex")
});

static BIG_O: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bO\(([^)]+)\)").expect("valid big-o regex"));

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]*)\)").expect("valid parenthesis regex"));

static SLASH: Lazy<Regex> = Lazy::new(|| Regex::new("/").expect("valid slash regex"));

static CAPS_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2,6}\b").expect("valid acronym regex"));

/// Flatten list items into sentences and join all lines with spaces
pub(super) fn flatten_lists(text: &str, _normalizer: &Normalizer<'_>) -> String {
    let mut sentences: Vec<String> = Vec::new();

    for line in text.split('\n') {
        if let Some(caps) = BULLET.captures(line) {
            let item = caps[1].trim();
            if item.is_empty() {
                continue;
            }
            if item.ends_with(['.', '!', '?']) {
                sentences.push(item.to_string());
            } else {
                sentences.push(format!("{item}."));
            }
        } else {
            let line = line.trim();
            if !line.is_empty() {
                sentences.push(line.to_string());
            }
        }
    }

    sentences.join(" ")
}

/// "O(n^2)" -> "big o of n to the power of 2"
pub(super) fn replace_big_o(text: &str, _normalizer: &Normalizer<'_>) -> String {
    BIG_O
        .replace_all(text, |caps: &Captures<'_>| {
            let inner = caps[1].trim().replace('^', " to the power of ");
            let inner = split_camel(&inner).replace('/', " slash ");
            format!("big o of {inner}")
        })
        .into_owned()
}

/// Stripping a parenthetical keeps any markers it held
pub(super) fn apply_paren_policy(text: &str, normalizer: &Normalizer<'_>) -> String {
    let policy = normalizer.config().paren_policy;
    if policy == ParenPolicy::Keep {
        return text.to_string();
    }

    PARENTHETICAL
        .replace_all(text, |caps: &Captures<'_>| {
            let inner = &caps[1];
            match policy {
                ParenPolicy::Strip => match TagPlaceholders::keys_in(inner) {
                    keys if keys.is_empty() => String::new(),
                    keys => format!(" {keys} "),
                },
                ParenPolicy::Unwrap => format!(" {inner} "),
                ParenPolicy::Expand | ParenPolicy::Keep => format!(", {inner}"),
            }
        })
        .into_owned()
}

pub(super) fn replace_abbreviations(text: &str, normalizer: &Normalizer<'_>) -> String {
    normalizer
        .abbreviation_rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Tech vocabulary, longest key first
pub(super) fn replace_tech_terms(text: &str, normalizer: &Normalizer<'_>) -> String {
    normalizer
        .tech_rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// `/` directly after a word character and not before whitespace
fn is_word_slash(text: &str, start: usize, end: usize) -> bool {
    char_before(text, start).is_some_and(is_word_char)
        && !char_after(text, end).is_some_and(char::is_whitespace)
}

/// Ampersands, pluses and word-adjacent slashes
pub(super) fn replace_symbols(text: &str, _normalizer: &Normalizer<'_>) -> String {
    let text = text.replace('&', " and ").replace('+', " plus ");
    replace_guarded(&text, &SLASH, is_word_slash, |_| " slash ".to_string())
}

/// Spell forced acronyms, keep stoplisted ones, lowercase other all-caps words
pub(super) fn rewrite_acronyms(text: &str, normalizer: &Normalizer<'_>) -> String {
    if !normalizer.config().auto_spell_acronyms {
        return text.to_string();
    }

    CAPS_WORD
        .replace_all(text, |caps: &Captures<'_>| {
            let word = &caps[0];
            if normalizer.is_stoplisted_acronym(word) {
                word.to_string()
            } else if normalizer.is_forced_acronym(word) {
                spell_letters(word)
            } else {
                word.to_lowercase()
            }
        })
        .into_owned()
}
