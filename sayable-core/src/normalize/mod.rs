//! Normalization engine
//!
//! Raw text is rewritten into speakable text by a fixed, ordered list of
//! stages. Each stage is a pure `(text, normalizer) -> text` function; later
//! stages rely on earlier ones having already resolved overlapping patterns
//! (versions before decimals, units before integers, and so on).
//!
//! Markers such as `[laugh]` are lifted out into placeholders after the
//! preparation stages and restored verbatim once every rewrite has run, so no
//! stage can alter them.
//!
//! # Example
//!
//! ```
//! use sayable_core::{normalize, Config};
//!
//! let config = Config::default();
//! assert_eq!(
//!     normalize("Deploy v2.1.0 to 10.0.0.1 at 9:05 am", &config),
//!     "Deploy version two point one point zero to one zero dot zero dot zero dot one at nine oh five a m"
//! );
//! ```

mod cleanup;
mod lexical;
pub mod numbers;
mod pattern;
mod quantities;
mod speech;
mod tags;
mod technical;
pub mod time;
mod web;

use crate::config::Config;
use once_cell::sync::Lazy;
use pattern::LiteralRule;
use regex::Regex;
use std::collections::BTreeSet;
use tags::TagPlaceholders;
use tracing::trace;

pub use numbers::{
    decimal_to_words, digits_to_words, number_to_words, ordinal_to_words, signed_number_to_words,
};
pub use time::{time_to_words, Meridiem};

/// One named rewrite step
#[derive(Clone, Copy)]
struct Stage {
    name: &'static str,
    apply: fn(&str, &Normalizer<'_>) -> String,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

const fn stage(name: &'static str, apply: fn(&str, &Normalizer<'_>) -> String) -> Stage {
    Stage { name, apply }
}

/// Stages that run before markers are protected
const PREPARE: [Stage; 3] = [
    stage("line_endings", cleanup::unify_line_endings),
    stage("sound_effects", tags::convert_sound_effects),
    stage("lists", lexical::flatten_lists),
];

/// Stages that run while markers are held as placeholders
const REWRITE: [Stage; 24] = [
    stage("urls", web::replace_urls),
    stage("emails", web::replace_emails),
    stage("paths", web::replace_paths),
    stage("handles", web::replace_handles_and_hashtags),
    stage("big_o", lexical::replace_big_o),
    stage("parentheses", lexical::apply_paren_policy),
    stage("abbreviations", lexical::replace_abbreviations),
    stage("tech_terms", lexical::replace_tech_terms),
    stage("symbols", lexical::replace_symbols),
    stage("ip_addresses", technical::replace_ip_addresses),
    stage("versions", technical::replace_versions),
    stage("mac_addresses", technical::replace_mac_addresses),
    stage("hex_literals", technical::replace_hex_literals),
    stage("hyphen_units", quantities::split_hyphen_units),
    stage("quantifier_minutes", quantities::replace_quantifier_minutes),
    stage("units", quantities::replace_units),
    stage("times", quantities::replace_times),
    stage("ordinals", quantities::replace_ordinals),
    stage("decimals", quantities::replace_decimals),
    stage("integers", quantities::replace_integers),
    stage("the_min", quantities::replace_the_min),
    stage("acronyms", lexical::rewrite_acronyms),
    stage("emoji", cleanup::strip_emoji),
    stage("whitespace", cleanup::collapse_whitespace),
];

/// Uppercased tech keys of this shape are always spelled when written in capitals
static SPELLABLE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9+/.-]+$").expect("valid spellable key regex"));

/// Normalization engine bound to one configuration
///
/// Building a `Normalizer` compiles the configured vocabularies once. The
/// value is immutable and `Sync`, so a single instance can serve many
/// documents across threads.
#[derive(Debug, Clone)]
pub struct Normalizer<'c> {
    config: &'c Config,
    abbreviations: Vec<LiteralRule>,
    tech_terms: Vec<LiteralRule>,
    forced_acronyms: BTreeSet<String>,
    stoplisted_acronyms: BTreeSet<String>,
}

impl<'c> Normalizer<'c> {
    /// Compile the vocabularies in `config`
    pub fn new(config: &'c Config) -> Self {
        let abbreviations = config
            .abbreviations
            .iter()
            .filter_map(|(key, spoken)| LiteralRule::new(key, spoken))
            .collect();

        let mut tech_keys: Vec<(&String, &String)> = config.tech_pronunciations.iter().collect();
        tech_keys.sort_by_key(|(key, _)| std::cmp::Reverse(key.chars().count()));
        let tech_terms = tech_keys
            .into_iter()
            .filter_map(|(key, spoken)| LiteralRule::new(key, spoken))
            .collect();

        let forced_acronyms = config
            .acronym_force
            .iter()
            .map(|word| word.to_uppercase())
            .chain(
                config
                    .tech_pronunciations
                    .keys()
                    .map(|key| key.to_uppercase())
                    .filter(|key| SPELLABLE_KEY.is_match(key)),
            )
            .collect();

        let stoplisted_acronyms = config
            .acronym_stoplist
            .iter()
            .map(|word| word.to_uppercase())
            .collect();

        Self {
            config,
            abbreviations,
            tech_terms,
            forced_acronyms,
            stoplisted_acronyms,
        }
    }

    /// Configuration this engine was built from
    pub fn config(&self) -> &'c Config {
        self.config
    }

    /// Rewrite `text` into speakable form
    pub fn normalize(&self, text: &str) -> String {
        let prepared = self.run_stages(&PREPARE, text.to_string());

        let (protected, placeholders) =
            TagPlaceholders::protect(&prepared, &self.config.allowed_tags);
        if !placeholders.is_empty() {
            trace!(markers = placeholders.len(), "protected markers");
        }

        let rewritten = self.run_stages(&REWRITE, protected);
        placeholders.restore(&rewritten)
    }

    fn run_stages(&self, stages: &[Stage], text: String) -> String {
        stages.iter().fold(text, |text, stage| {
            let next = (stage.apply)(&text, self);
            if next != text {
                trace!(stage = stage.name, "stage rewrote text");
            }
            next
        })
    }

    pub(crate) fn abbreviation_rules(&self) -> &[LiteralRule] {
        &self.abbreviations
    }

    pub(crate) fn tech_rules(&self) -> &[LiteralRule] {
        &self.tech_terms
    }

    pub(crate) fn is_forced_acronym(&self, word: &str) -> bool {
        self.forced_acronyms.contains(&word.to_uppercase())
    }

    pub(crate) fn is_stoplisted_acronym(&self, word: &str) -> bool {
        self.stoplisted_acronyms.contains(&word.to_uppercase())
    }
}

/// Rewrite `text` into speakable form under `config`
///
/// Never fails: fragments that cannot be converted are left as written.
pub fn normalize(text: &str, config: &Config) -> String {
    Normalizer::new(config).normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_are_unique() {
        let names: BTreeSet<&str> = PREPARE.iter().chain(REWRITE.iter()).map(|s| s.name).collect();
        assert_eq!(names.len(), PREPARE.len() + REWRITE.len());
    }

    #[test]
    fn test_versions_run_before_decimals() {
        let position = |name: &str| REWRITE.iter().position(|s| s.name == name);
        assert!(position("versions") < position("decimals"));
        assert!(position("units") < position("integers"));
        assert!(position("times") < position("integers"));
        assert!(position("urls") < position("emails"));
    }

    #[test]
    fn test_forced_acronyms_include_tech_keys() {
        let config = Config::default();
        let normalizer = Normalizer::new(&config);
        assert!(normalizer.is_forced_acronym("GPU"));
        assert!(normalizer.is_forced_acronym("gpu"));
        assert!(!normalizer.is_forced_acronym("MUCH"));
    }

    #[test]
    fn test_markers_survive_rewrites() {
        let config = Config::default();
        assert_eq!(
            normalize("[laugh] 42 [sigh] URL", &config),
            "[laugh] forty two [sigh] u r l"
        );
    }

    #[test]
    fn test_sound_effect_then_protection() {
        let config = Config::default();
        assert_eq!(
            normalize("That's great *laugh* and (beep) [noise]", &config),
            "That's great [laugh] and, beep"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("", &Config::default()), "");
        assert_eq!(normalize(" \n\r\n ", &Config::default()), "");
    }

    #[test]
    fn test_normalizer_is_reusable() {
        let config = Config::default();
        let normalizer = Normalizer::new(&config);
        assert_eq!(normalizer.normalize("2nd"), "second");
        assert_eq!(normalizer.normalize("3rd"), "third");
        assert_eq!(normalizer.config().tag_min_confidence, 0.55);
    }
}
