//! Numbers, units, clock times and minute phrases

use super::numbers::{decimal_to_words, integer_literal_to_words, ordinal_to_words};
use super::pattern::char_before;
use super::time::{time_to_words, Meridiem};
use super::Normalizer;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Recognised unit spellings. Alternation order matters: shorter units that
/// prefix longer ones only win when followed by a word boundary.
const UNITS: &str = "kb|mb|gb|tb|kib|mib|gib|tib|hz|khz|mhz|ghz|kbps|mbps|gbps|ms|s|sec|secs|min|mins|hr|hrs|fps|dpi|ppi|px";

static HYPHEN_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b([0-9]+(?:\.[0-9]+)?)-(?:({UNITS})\b|(%))"))
        .expect("valid hyphen unit regex")
});

static QUANTITY_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b([0-9]+(?:\.[0-9]+)?)\s?(?:({UNITS})\b|(%))"))
        .expect("valid unit regex")
});

static QUANTIFIER_MINUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(a|an|one|two|three|four|five|six|seven|eight|nine|ten|couple|few|several)\s+mins?\b",
    )
    .expect("valid quantifier regex")
});

static CLOCK_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([01]?[0-9]|2[0-3]):([0-5][0-9])(?:\s?(a\.?m\.?|p\.?m\.?))?\b")
        .expect("valid time regex")
});

static ORDINAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([0-9]+)(?:st|nd|rd|th)\b").expect("valid ordinal regex")
});

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]+\.[0-9]+\b").expect("valid decimal regex"));

static INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-?\b([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)\b").expect("valid integer regex")
});

static THE_MIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(the) min\b").expect("valid minimum regex"));

/// Unit text from either the word alternative or the percent sign
fn unit_of<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str())
}

/// "2-min" -> "2 min"
pub(super) fn split_hyphen_units(text: &str, _normalizer: &Normalizer<'_>) -> String {
    HYPHEN_UNIT
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{} {}", &caps[1], unit_of(caps))
        })
        .into_owned()
}

/// "a min" -> "a minute", "few mins" -> "few minutes"
pub(super) fn replace_quantifier_minutes(text: &str, _normalizer: &Normalizer<'_>) -> String {
    QUANTIFIER_MINUTES
        .replace_all(text, |caps: &Captures<'_>| {
            let quantifier = &caps[1];
            match quantifier.to_lowercase().as_str() {
                "a" | "an" | "one" if quantifier.starts_with(char::is_uppercase) => {
                    "A minute".to_string()
                }
                "a" | "an" | "one" => "a minute".to_string(),
                _ => format!("{quantifier} minutes"),
            }
        })
        .into_owned()
}

fn quantity_to_words(number: &str) -> String {
    decimal_to_words(number).unwrap_or_else(|| integer_literal_to_words(number))
}

/// "3.5GHz" -> "three point five gigahertz"
pub(super) fn replace_units(text: &str, normalizer: &Normalizer<'_>) -> String {
    let pronunciations = &normalizer.config().unit_pronunciations;
    QUANTITY_UNIT
        .replace_all(text, |caps: &Captures<'_>| {
            let unit = unit_of(caps).to_lowercase();
            let spoken = pronunciations.get(&unit).unwrap_or(&unit);
            format!("{} {spoken}", quantity_to_words(&caps[1]))
        })
        .into_owned()
}

pub(super) fn replace_times(text: &str, normalizer: &Normalizer<'_>) -> String {
    CLOCK_TIME
        .replace_all(text, |caps: &Captures<'_>| {
            let (Ok(hour), Ok(minute)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
                return caps[0].to_string();
            };
            let meridiem = caps.get(3).and_then(|m| Meridiem::parse(m.as_str()));
            time_to_words(hour, minute, meridiem, normalizer.config())
        })
        .into_owned()
}

/// "21st" -> "twenty first"
pub(super) fn replace_ordinals(text: &str, _normalizer: &Normalizer<'_>) -> String {
    ORDINAL
        .replace_all(text, |caps: &Captures<'_>| match caps[1].parse::<u64>() {
            Ok(n) => ordinal_to_words(n),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

pub(super) fn replace_decimals(text: &str, _normalizer: &Normalizer<'_>) -> String {
    DECIMAL
        .replace_all(text, |caps: &Captures<'_>| {
            decimal_to_words(&caps[0]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Plain and thousands-grouped integers. A leading `-` that starts a word is
/// read as "minus".
pub(super) fn replace_integers(text: &str, _normalizer: &Normalizer<'_>) -> String {
    INTEGER
        .replace_all(text, |caps: &Captures<'_>| {
            let words = integer_literal_to_words(&caps[1].replace(',', ""));
            let Some(whole) = caps.get(0) else {
                return words;
            };
            if !whole.as_str().starts_with('-') {
                return words;
            }
            if char_before(text, whole.start()).map_or(true, char::is_whitespace) {
                format!("minus {words}")
            } else {
                format!("-{words}")
            }
        })
        .into_owned()
}

/// "the min" -> "the minimum"
pub(super) fn replace_the_min(text: &str, _normalizer: &Normalizer<'_>) -> String {
    THE_MIN.replace_all(text, "${1} minimum").into_owned()
}
