//! Property-based tests for normalization and classification

use proptest::prelude::*;
use regex::Regex;
use sayable_core::normalize::numbers::number_to_words;
use sayable_core::{normalize, train, Config};

/// Parse the cardinal spelling produced by `number_to_words`
fn words_to_number(words: &str) -> u64 {
    let mut total = 0;
    let mut current = 0;

    for word in words.split_whitespace() {
        match word {
            "hundred" => current *= 100,
            "thousand" => {
                total += current * 1_000;
                current = 0;
            }
            "million" => {
                total += current * 1_000_000;
                current = 0;
            }
            "billion" => {
                total += current * 1_000_000_000;
                current = 0;
            }
            other => current += small_value(other),
        }
    }

    total + current
}

fn small_value(word: &str) -> u64 {
    const SMALL: [&str; 20] = [
        "zero",
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ];
    const TENS: [&str; 8] = [
        "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ];

    if let Some(value) = SMALL.iter().position(|w| *w == word) {
        return value as u64;
    }
    match TENS.iter().position(|w| *w == word) {
        Some(index) => (index as u64 + 2) * 10,
        None => panic!("unexpected number word {word:?}"),
    }
}

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(Config::default().allowed_tags)
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", " ", "www.", "https://", "/", "~/", "#", "@", "O("]),
        "[a-zA-Z0-9 .,:#@/_-]{0,16}",
    )
        .prop_map(|(prefix, body)| format!("{prefix}{body}"))
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", " ", "/", "."])
}

fn sentence_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-zA-Z]{1,8}|[0-9]{1,6}", 1..8),
        prop::sample::select(vec!["", ".", "!", "?"]),
    )
        .prop_map(|(words, end)| format!("{}{end}", words.join(" ")))
}

proptest! {
    #[test]
    fn number_words_parse_back(n in 0u64..=1_000_000_000) {
        prop_assert_eq!(words_to_number(&number_to_words(n)), n);
    }

    #[test]
    fn markers_survive_in_order(
        pieces in prop::collection::vec(
            (fragment_strategy(), tag_strategy(), separator_strategy()),
            0..6,
        ),
        tail in fragment_strategy(),
    ) {
        let marker = Regex::new(r"\[[a-z ]+\]").unwrap();

        let mut text = String::new();
        let mut expected = Vec::new();
        for (fragment, tag, separator) in &pieces {
            text.push_str(fragment);
            text.push_str(tag);
            text.push_str(separator);
            expected.push(tag.clone());
        }
        text.push_str(&tail);

        let out = normalize(&text, &Config::default());
        let found: Vec<String> = marker
            .find_iter(&out)
            .map(|m| m.as_str().to_string())
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn normalization_is_idempotent_on_plain_sentences(text in sentence_strategy()) {
        let config = Config::default();
        let once = normalize(&text, &config);
        let twice = normalize(&once, &config);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_has_no_surrounding_whitespace(text in "\\PC{0,64}") {
        let out = normalize(&text, &Config::default());
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn single_label_model_is_certain(text in "[a-z ]{0,32}") {
        let model = train(&[("whatever it was", "sigh")]).unwrap();
        let prediction = model.predict(&text);
        prop_assert_eq!(prediction.label, "sigh");
        prop_assert_eq!(prediction.confidence, 1.0);
    }

    #[test]
    fn confidence_is_a_probability(text in "\\PC{0,64}") {
        let prediction = sayable_core::ClassifierModel::builtin().predict(&text);
        prop_assert!((0.0..=1.0).contains(&prediction.confidence));
    }
}
