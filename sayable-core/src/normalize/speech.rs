//! Spoken forms for tokens, domains and whitespace
//!
//! Helpers shared by the URL, email, path and technical stages.

use super::numbers::integer_literal_to_words;
use crate::config::Config;
use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel regex"));

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

static HORIZONTAL_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t ]+").expect("valid space regex"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([.,!?])").expect("valid punctuation regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Characters peeled off the end of a URL or path before it is spoken
const TRAILING_PUNCT: &[char] = &['.', ',', '!', '?', ')', ']', '}', '"', '\''];

/// Lowercased letters and digits separated by spaces ("SSH" -> "s s h")
pub(crate) fn spell_letters(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert a space at lower-to-upper transitions ("myFile" -> "my File")
pub(crate) fn split_camel(token: &str) -> String {
    CAMEL_BOUNDARY.replace_all(token, "$1 $2").into_owned()
}

/// Speak a generic identifier: camel case split, separators named, digit
/// runs read as separate number words
pub(crate) fn speak_token(token: &str) -> String {
    let token = split_camel(token)
        .replace('-', " dash ")
        .replace('_', " underscore ")
        .replace('.', " dot ");
    let token = DIGIT_RUN.replace_all(&token, |caps: &regex::Captures<'_>| {
        format!(" {} ", integer_literal_to_words(&caps[0]))
    });
    normalize_whitespace(&token)
}

/// Collapse spaces, pull sentence punctuation onto the preceding word, trim
pub(crate) fn normalize_whitespace(text: &str) -> String {
    let text = HORIZONTAL_SPACE.replace_all(text, " ");
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Split trailing sentence punctuation and closing brackets off a literal
pub(crate) fn split_trailing_punct(literal: &str) -> (&str, &str) {
    let core = literal.trim_end_matches(TRAILING_PUNCT);
    (core, &literal[core.len()..])
}

/// Speak a single domain label
fn speak_domain_label(label: &str, config: &Config) -> String {
    let key = label.to_lowercase();
    if let Some(spoken) = config.domain_pronunciations.get(&key) {
        return spoken.clone();
    }
    if key == "www" {
        return spell_letters(&key);
    }
    if label.chars().all(|c| c.is_ascii_digit()) {
        return integer_literal_to_words(label);
    }
    if is_upper(label) && (2..=6).contains(&label.chars().count()) {
        return spell_letters(label);
    }
    speak_token(label)
}

/// Has cased letters and all of them are uppercase
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// Speak a host name label by label, joined with "dot"
pub(crate) fn speak_domain(host: &str, config: &Config) -> String {
    host.split('.')
        .filter(|label| !label.is_empty())
        .map(|label| speak_domain_label(label, config))
        .collect::<Vec<_>>()
        .join(" dot ")
}
