//! Configuration for normalization and tag insertion
//!
//! A [`Config`] is resolved once by the caller (from TOML, JSON, or code) and
//! then shared read-only by every stage. Each field falls back to its default
//! when absent, so partial documents always deserialize.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Default configuration values
pub mod defaults {
    /// Markers the downstream speech engine understands
    pub const ALLOWED_TAGS: &[&str] = &[
        "[laugh]",
        "[chuckle]",
        "[sigh]",
        "[gasp]",
        "[cough]",
        "[clear throat]",
        "[sniff]",
        "[groan]",
        "[shush]",
    ];

    /// Classifier label to marker
    pub const LABEL_TO_TAG: &[(&str, &str)] = &[
        ("chuckle", "[chuckle]"),
        ("clear_throat", "[clear throat]"),
        ("cough", "[cough]"),
        ("gasp", "[gasp]"),
        ("groan", "[groan]"),
        ("laugh", "[laugh]"),
        ("none", ""),
        ("shush", "[shush]"),
        ("sigh", "[sigh]"),
        ("sniff", "[sniff]"),
    ];

    /// Minimum classifier confidence before a marker is inserted
    pub const TAG_MIN_CONFIDENCE: f64 = 0.55;

    /// Word spoken before single-digit minutes ("oh five")
    pub const MINUTE_LEADING_ZERO: &str = "oh";

    /// Spoken form of every recognised unit
    pub const UNIT_PRONUNCIATIONS: &[(&str, &str)] = &[
        ("kb", "kilobytes"),
        ("mb", "megabytes"),
        ("gb", "gigabytes"),
        ("tb", "terabytes"),
        ("kib", "kibibytes"),
        ("mib", "mebibytes"),
        ("gib", "gibibytes"),
        ("tib", "tebibytes"),
        ("hz", "hertz"),
        ("khz", "kilohertz"),
        ("mhz", "megahertz"),
        ("ghz", "gigahertz"),
        ("kbps", "kilobits per second"),
        ("mbps", "megabits per second"),
        ("gbps", "gigabits per second"),
        ("ms", "milliseconds"),
        ("s", "seconds"),
        ("sec", "seconds"),
        ("secs", "seconds"),
        ("min", "minutes"),
        ("mins", "minutes"),
        ("hr", "hours"),
        ("hrs", "hours"),
        ("fps", "frames per second"),
        ("dpi", "dots per inch"),
        ("ppi", "pixels per inch"),
        ("px", "pixels"),
        ("%", "percent"),
    ];

    /// Domain labels with a non-obvious reading
    pub const DOMAIN_PRONUNCIATIONS: &[(&str, &str)] =
        &[("github", "git hub"), ("gitlab", "git lab"), ("io", "i o")];

    /// Technical vocabulary
    pub const TECH_PRONUNCIATIONS: &[(&str, &str)] = &[
        ("ai", "a i"),
        ("api", "a p i"),
        ("cpu", "c p u"),
        ("gpu", "g p u"),
        ("ip", "i p"),
        ("json", "jason"),
        ("kubectl", "cube control"),
        ("nginx", "engine x"),
        ("sql", "sequel"),
        ("ssh", "s s h"),
        ("tts", "t t s"),
        ("ui", "u i"),
        ("url", "u r l"),
    ];

    /// Written abbreviations
    pub const ABBREVIATIONS: &[(&str, &str)] = &[
        ("approx", "approximately"),
        ("e.g.", "for example"),
        ("etc", "et cetera"),
        ("i.e.", "that is"),
        ("vs", "versus"),
    ];
}

/// Where an inserted marker goes relative to its sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPosition {
    /// Marker, space, sentence
    #[default]
    Prefix,
    /// Sentence, space, marker
    Suffix,
}

/// Clock reading style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeStyle {
    /// Hours reduced modulo twelve
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// Hours spoken as written
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// How whole hours are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZero {
    /// "three o'clock"
    #[default]
    Oclock,
    /// "three hundred"
    Hundred,
}

/// How IPv4 octets are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpDigitStyle {
    /// "one nine two"
    #[default]
    Single,
    /// "one hundred ninety two"
    Grouped,
}

/// Treatment of parenthesised text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParenPolicy {
    /// Drop the parenthetical entirely
    Strip,
    /// Keep the content inline without the parentheses
    Unwrap,
    /// Turn the content into a comma-joined clause
    #[default]
    Expand,
    /// Leave parentheses untouched
    #[serde(alias = "passthrough", alias = "none")]
    Keep,
}

/// Treatment of filesystem paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Read paths segment by segment
    #[default]
    Speak,
    /// Leave paths untouched
    Keep,
}

/// How much of a URL is read aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicy {
    /// Host (and port) only
    #[default]
    Domain,
    /// Host, path, and optionally query and fragment
    Full,
}

/// Resolved options for a normalization and tagging run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Protected marker tokens, in priority order
    pub allowed_tags: Vec<String>,
    /// Whether the tag insertion layer runs
    pub tagger_enabled: bool,
    /// Classifier label to marker; empty marker means "never tag"
    pub label_to_tag: BTreeMap<String, String>,
    /// Minimum confidence for inserting a marker
    pub tag_min_confidence: f64,
    /// Marker placement
    pub tag_position: TagPosition,
    pub time_style: TimeStyle,
    pub time_zero: TimeZero,
    /// Append "a m"/"p m" when the input carried a meridiem
    pub time_include_am_pm: bool,
    pub minute_leading_zero: String,
    pub ip_digit_style: IpDigitStyle,
    /// Lowercase unit to spoken form
    pub unit_pronunciations: BTreeMap<String, String>,
    /// Lowercase domain label to spoken form
    pub domain_pronunciations: BTreeMap<String, String>,
    /// Term to spoken form, matched case-insensitively as a whole word
    pub tech_pronunciations: BTreeMap<String, String>,
    /// Abbreviation to expansion, matched case-insensitively as a whole word
    pub abbreviations: BTreeMap<String, String>,
    pub paren_policy: ParenPolicy,
    pub path_policy: PathPolicy,
    pub url_include_scheme: bool,
    pub url_policy: UrlPolicy,
    pub url_read_query: bool,
    pub url_read_fragment: bool,
    pub url_include_port: bool,
    /// Rewrite all-caps words (spell forced ones, lowercase the rest)
    pub auto_spell_acronyms: bool,
    /// All-caps words left exactly as written
    pub acronym_stoplist: BTreeSet<String>,
    /// All-caps words always spelled letter by letter
    pub acronym_force: BTreeSet<String>,
    pub strip_emoji: bool,
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_tags: defaults::ALLOWED_TAGS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            tagger_enabled: true,
            label_to_tag: string_map(defaults::LABEL_TO_TAG),
            tag_min_confidence: defaults::TAG_MIN_CONFIDENCE,
            tag_position: TagPosition::default(),
            time_style: TimeStyle::default(),
            time_zero: TimeZero::default(),
            time_include_am_pm: true,
            minute_leading_zero: defaults::MINUTE_LEADING_ZERO.to_string(),
            ip_digit_style: IpDigitStyle::default(),
            unit_pronunciations: string_map(defaults::UNIT_PRONUNCIATIONS),
            domain_pronunciations: string_map(defaults::DOMAIN_PRONUNCIATIONS),
            tech_pronunciations: string_map(defaults::TECH_PRONUNCIATIONS),
            abbreviations: string_map(defaults::ABBREVIATIONS),
            paren_policy: ParenPolicy::default(),
            path_policy: PathPolicy::default(),
            url_include_scheme: false,
            url_policy: UrlPolicy::default(),
            url_read_query: false,
            url_read_fragment: false,
            url_include_port: true,
            auto_spell_acronyms: true,
            acronym_stoplist: BTreeSet::new(),
            acronym_force: BTreeSet::new(),
            strip_emoji: true,
        }
    }
}

impl Config {
    /// Check values that deserialize fine but cannot be honoured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.tag_min_confidence) {
            return Err(ConfigError::ConfidenceOutOfRange(self.tag_min_confidence));
        }

        for tag in &self.allowed_tags {
            if !is_well_formed_tag(tag) {
                return Err(ConfigError::MalformedTag(tag.clone()));
            }
        }

        for (label, tag) in &self.label_to_tag {
            if !tag.is_empty() && !self.allowed_tags.contains(tag) {
                return Err(ConfigError::UnknownTagTarget {
                    label: label.clone(),
                    tag: tag.clone(),
                });
            }
        }

        Ok(())
    }

    /// Marker configured for a classifier label, if any
    pub fn tag_for_label(&self, label: &str) -> Option<&str> {
        self.label_to_tag
            .get(label)
            .map(String::as_str)
            .filter(|tag| !tag.is_empty())
    }
}

/// `[` + ASCII letters and spaces + `]`, the shape protection recognises
fn is_well_formed_tag(tag: &str) -> bool {
    tag.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|inner| {
            !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
        })
}
