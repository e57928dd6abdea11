//! Addresses, versions and hex literals

use super::numbers::{digits_to_words, integer_literal_to_words};
use super::speech::spell_letters;
use super::Normalizer;
use crate::config::IpDigitStyle;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("valid ipv4 regex"));

/// `v` followed by two or more dotted parts, or three or more bare parts
static VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:v([0-9]+(?:\.[0-9]+)+)|([0-9]+\.[0-9]+(?:\.[0-9]+)+))\b")
        .expect("valid version regex")
});

static MAC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}\b").expect("valid mac regex")
});

static HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b0x([0-9A-Fa-f]+)\b").expect("valid hex regex"));

pub(super) fn replace_ip_addresses(text: &str, normalizer: &Normalizer<'_>) -> String {
    let style = normalizer.config().ip_digit_style;
    IPV4.replace_all(text, |caps: &Captures<'_>| {
        caps[0]
            .split('.')
            .map(|octet| match style {
                IpDigitStyle::Single => digits_to_words(octet),
                IpDigitStyle::Grouped => integer_literal_to_words(octet),
            })
            .collect::<Vec<_>>()
            .join(" dot ")
    })
    .into_owned()
}

pub(super) fn replace_versions(text: &str, _normalizer: &Normalizer<'_>) -> String {
    VERSION
        .replace_all(text, |caps: &Captures<'_>| {
            let dotted = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            let parts = dotted
                .split('.')
                .map(integer_literal_to_words)
                .collect::<Vec<_>>()
                .join(" point ");
            format!("version {parts}")
        })
        .into_owned()
}

pub(super) fn replace_mac_addresses(text: &str, _normalizer: &Normalizer<'_>) -> String {
    MAC.replace_all(text, |caps: &Captures<'_>| {
        caps[0]
            .split(':')
            .map(spell_letters)
            .collect::<Vec<_>>()
            .join(" colon ")
    })
    .into_owned()
}

pub(super) fn replace_hex_literals(text: &str, _normalizer: &Normalizer<'_>) -> String {
    HEX.replace_all(text, |caps: &Captures<'_>| {
        format!("hex {}", spell_letters(&caps[1]))
    })
    .into_owned()
}
