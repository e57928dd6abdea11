//! Sound-effect markers and tag protection
//!
//! Written cues such as `(laugh)` or `*sigh*` become canonical markers, and
//! markers are then swapped for opaque placeholders so no rewrite stage can
//! touch them before they are restored at the end of the pipeline.

use super::Normalizer;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Sound cue in parentheses, brackets, or asterisks. The closing asterisk
/// does not consume the whitespace after it.
static SOUND_EFFECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\*\s*|\(|\[)\s*(sigh|laugh|chuckle|gasp|groan|cough|sniff|shush|clear\s+throat)\s*(?:\*|\)|\])",
    )
    .expect("valid sound effect regex")
});

/// Bracketed token that may be a marker
static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[[a-z ]+\]").expect("valid bracket regex"));

/// Private-use code points reserved for placeholders. The URL and path
/// patterns exclude this range so a placeholder always ends the literal.
const RESERVED: RangeInclusive<char> = '\u{E000}'..='\u{E01F}';

const KEY_OPEN: char = '\u{E000}';
const KEY_CLOSE: char = '\u{E001}';
const KEY_DIGIT_ZERO: u32 = 0xE010;

/// A placeholder: open mark, index as shifted decimal digits, close mark
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x{E000}([\x{E010}-\x{E019}]+)\x{E001}").expect("valid placeholder regex")
});

/// Rewrite sound cues to their marker, or drop them when no marker exists
pub(super) fn convert_sound_effects(text: &str, normalizer: &Normalizer<'_>) -> String {
    let markers: HashMap<String, &str> = normalizer
        .config()
        .allowed_tags
        .iter()
        .map(|tag| {
            let name = tag.trim_matches(|c| c == '[' || c == ']').to_lowercase();
            (name, tag.as_str())
        })
        .collect();

    SOUND_EFFECT
        .replace_all(text, |caps: &Captures<'_>| {
            let name = caps[1]
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            markers.get(&name).copied().unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Markers lifted out of the text for the duration of the pipeline
#[derive(Debug, Default)]
pub(super) struct TagPlaceholders {
    markers: Vec<String>,
}

impl TagPlaceholders {
    /// Placeholder text for marker `index`. Built only from reserved code
    /// points, so no word, digit or whitespace pattern can match inside it.
    fn key(index: usize) -> String {
        let digits = index
            .to_string()
            .chars()
            .filter_map(|d| d.to_digit(10))
            .filter_map(|d| char::from_u32(KEY_DIGIT_ZERO + d))
            .collect::<String>();
        format!("{KEY_OPEN}{digits}{KEY_CLOSE}")
    }

    fn index_of(digits: &str) -> usize {
        digits.chars().fold(0, |acc, c| {
            acc * 10 + (u32::from(c) - KEY_DIGIT_ZERO) as usize
        })
    }

    /// Replace allowed markers with placeholders and drop every other
    /// bracketed token. Reserved code points already in the text are
    /// removed first so they cannot pose as placeholders.
    pub(super) fn protect(text: &str, allowed_tags: &[String]) -> (String, Self) {
        let text: String = text.chars().filter(|c| !RESERVED.contains(c)).collect();

        let mut placeholders = Self::default();
        let protected = BRACKETED
            .replace_all(&text, |caps: &Captures<'_>| {
                let tag = &caps[0];
                if allowed_tags.iter().any(|allowed| allowed == tag) {
                    let key = Self::key(placeholders.markers.len());
                    placeholders.markers.push(tag.to_string());
                    key
                } else {
                    String::new()
                }
            })
            .into_owned();
        (protected, placeholders)
    }

    /// Put the original markers back
    pub(super) fn restore(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                self.markers
                    .get(Self::index_of(&caps[1]))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }

    /// Placeholders found in `text`, in order, separated by spaces
    pub(super) fn keys_in(text: &str) -> String {
        PLACEHOLDER
            .find_iter(text)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(super) fn len(&self) -> usize {
        self.markers.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn convert(text: &str) -> String {
        let config = Config::default();
        convert_sound_effects(text, &Normalizer::new(&config))
    }

    #[test]
    fn test_sound_effects_become_markers() {
        assert_eq!(convert("well (laugh) ok"), "well [laugh] ok");
        assert_eq!(convert("*Sigh* fine"), "[sigh] fine");
        assert_eq!(convert("* sigh * fine"), "[sigh] fine");
        assert_eq!(convert("[CLEAR   THROAT] so"), "[clear throat] so");
    }

    #[test]
    fn test_unknown_sound_effect_is_dropped() {
        let config = Config {
            allowed_tags: vec!["[laugh]".to_string()],
            ..Config::default()
        };
        let out = convert_sound_effects("oh (gasp) no", &Normalizer::new(&config));
        assert_eq!(out, "oh  no");
    }

    #[test]
    fn test_protect_and_restore() {
        let allowed = vec!["[laugh]".to_string(), "[sigh]".to_string()];
        let (text, placeholders) =
            TagPlaceholders::protect("[laugh] a [beep] b [sigh] c [laugh]", &allowed);
        assert_eq!(
            text,
            format!(
                "{} a  b {} c {}",
                TagPlaceholders::key(0),
                TagPlaceholders::key(1),
                TagPlaceholders::key(2)
            )
        );
        assert_eq!(placeholders.len(), 3);
        assert!(!placeholders.is_empty());
        assert_eq!(placeholders.restore(&text), "[laugh] a  b [sigh] c [laugh]");
    }

    #[test]
    fn test_keys_hold_no_word_characters() {
        let key = TagPlaceholders::key(1203);
        assert_eq!(key.chars().count(), 6);
        assert!(key.chars().all(|c| RESERVED.contains(&c)));
        assert!(!key.chars().any(|c| c.is_alphanumeric() || c.is_whitespace() || c == '_'));
        assert_eq!(TagPlaceholders::index_of(&key[3..key.len() - 3]), 1203);
    }

    #[test]
    fn test_protect_is_case_sensitive_on_membership() {
        let allowed = vec!["[laugh]".to_string()];
        let (text, placeholders) = TagPlaceholders::protect("[LAUGH] ok", &allowed);
        assert_eq!(text, " ok");
        assert!(placeholders.is_empty());
    }

    #[test]
    fn test_restore_does_not_confuse_prefix_keys() {
        let allowed = vec!["[sigh]".to_string(), "[laugh]".to_string()];
        let input = "[sigh] ".repeat(11) + "[laugh]";
        let (text, placeholders) = TagPlaceholders::protect(&input, &allowed);
        assert!(text.contains(&TagPlaceholders::key(11)));
        assert_eq!(placeholders.restore(&text), input);
    }

    #[test]
    fn test_reserved_characters_in_input_are_removed() {
        let allowed = vec!["[sigh]".to_string()];
        let input = format!("a{} [sigh] b{}", TagPlaceholders::key(0), '\u{E005}');
        let (text, placeholders) = TagPlaceholders::protect(&input, &allowed);
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders.restore(&text), "a [sigh] b");
    }

    #[test]
    fn test_keys_in_collects_placeholders() {
        let allowed = vec!["[sigh]".to_string(), "[laugh]".to_string()];
        let (text, _) = TagPlaceholders::protect("x [sigh] y [laugh] z", &allowed);
        assert_eq!(
            TagPlaceholders::keys_in(&text),
            format!("{} {}", TagPlaceholders::key(0), TagPlaceholders::key(1))
        );
        assert_eq!(TagPlaceholders::keys_in("plain"), "");
    }
}
