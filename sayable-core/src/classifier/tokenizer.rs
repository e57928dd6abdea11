//! Token extraction shared by training and prediction

use once_cell::sync::Lazy;
use regex::Regex;

/// Words with an optional contraction, digit runs, and simple emoticons.
/// Applied to lowercased text, so `:D` is seen as `:d`.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z]+(?:'[a-z]+)?|\d+|[:;]-?[)d(]").expect("valid token regex")
});

/// Lowercase `text` and extract its tokens in order
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
