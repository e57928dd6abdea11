//! Line endings, emoji and final whitespace

use super::speech::normalize_whitespace;
use super::Normalizer;
use std::ops::RangeInclusive;

/// Pictographic blocks removed when emoji stripping is on
const EMOJI_RANGES: [RangeInclusive<u32>; 4] = [
    // Regional indicators (flags)
    0x1F1E6..=0x1F1FF,
    // Pictographs, emoticons, transport, alchemical, geometric, arrows,
    // supplemental symbols and extended-A
    0x1F300..=0x1FAFF,
    // Miscellaneous symbols
    0x2600..=0x26FF,
    // Dingbats
    0x2700..=0x27BF,
];

/// Variation selector 16 and zero width joiner
const EMOJI_JOINERS: [char; 2] = ['\u{FE0F}', '\u{200D}'];

pub(crate) fn is_emoji(c: char) -> bool {
    let code = u32::from(c);
    EMOJI_JOINERS.contains(&c) || EMOJI_RANGES.iter().any(|range| range.contains(&code))
}

pub(super) fn unify_line_endings(text: &str, _normalizer: &Normalizer<'_>) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub(super) fn strip_emoji(text: &str, normalizer: &Normalizer<'_>) -> String {
    if !normalizer.config().strip_emoji {
        return text.to_string();
    }
    text.chars().filter(|&c| !is_emoji(c)).collect()
}

pub(super) fn collapse_whitespace(text: &str, _normalizer: &Normalizer<'_>) -> String {
    normalize_whitespace(text)
}
