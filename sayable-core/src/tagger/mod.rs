//! Tag insertion
//!
//! Normalized text is split into sentences and each one gets at most one
//! marker, chosen by a [`Classifier`]. Sentences that already carry an allowed
//! marker are left alone.

use crate::classifier::Classifier;
use crate::config::{Config, TagPosition};
use tracing::debug;

/// Split at whitespace runs that follow `.`, `!` or `?`
///
/// The text is trimmed first and empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut previous: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if c.is_whitespace() && matches!(previous, Some('.' | '!' | '?')) {
            sentences.push(&text[start..index]);
            let mut end = index + c.len_utf8();
            while let Some(&(next_index, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_index + next.len_utf8();
                chars.next();
            }
            start = end;
            previous = None;
            continue;
        }
        previous = Some(c);
    }
    sentences.push(&text[start..]);

    sentences.retain(|s| !s.is_empty());
    sentences
}

fn already_tagged(sentence: &str, allowed_tags: &[String]) -> bool {
    allowed_tags.iter().any(|tag| sentence.contains(tag.as_str()))
}

/// Insert markers before or after sentences the classifier is confident about
///
/// Sentences are rejoined with single spaces. When tagging is disabled the
/// text is returned unchanged.
pub fn insert_tags<C>(text: &str, classifier: &C, config: &Config) -> String
where
    C: Classifier + ?Sized,
{
    if !config.tagger_enabled {
        return text.to_string();
    }

    split_sentences(text)
        .into_iter()
        .map(|sentence| {
            if already_tagged(sentence, &config.allowed_tags) {
                return sentence.to_string();
            }

            let prediction = classifier.predict(sentence);
            let tag = config
                .tag_for_label(&prediction.label)
                .filter(|_| prediction.confidence >= config.tag_min_confidence);

            debug!(
                label = %prediction.label,
                confidence = prediction.confidence,
                tagged = tag.is_some(),
                "classified sentence"
            );

            match (tag, config.tag_position) {
                (Some(tag), TagPosition::Prefix) => format!("{tag} {sentence}"),
                (Some(tag), TagPosition::Suffix) => format!("{sentence} {tag}"),
                (None, _) => sentence.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassifierModel, Prediction};

    /// Always answers with the same label and confidence
    struct Fixed(&'static str, f64);

    impl Classifier for Fixed {
        fn predict(&self, _text: &str) -> Prediction {
            Prediction {
                label: self.0.to_string(),
                confidence: self.1,
            }
        }
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("  One. Two!  Three?\nFour "),
            vec!["One.", "Two!", "Three?", "Four"]
        );
        assert_eq!(split_sentences("v1.2 is out.Next"), vec!["v1.2 is out.Next"]);
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_prefix_and_suffix() {
        let config = Config::default();
        assert_eq!(
            insert_tags("So funny. Ok.", &Fixed("laugh", 0.9), &config),
            "[laugh] So funny. [laugh] Ok."
        );

        let config = Config {
            tag_position: TagPosition::Suffix,
            ..Config::default()
        };
        assert_eq!(
            insert_tags("So funny.", &Fixed("laugh", 0.9), &config),
            "So funny. [laugh]"
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = Config::default();
        assert_eq!(
            insert_tags("Hm.", &Fixed("sigh", 0.55), &config),
            "[sigh] Hm."
        );
        assert_eq!(insert_tags("Hm.", &Fixed("sigh", 0.549), &config), "Hm.");
    }

    #[test]
    fn test_none_label_and_unknown_label() {
        let config = Config::default();
        assert_eq!(insert_tags("Fine.", &Fixed("none", 1.0), &config), "Fine.");
        assert_eq!(insert_tags("Fine.", &Fixed("mystery", 1.0), &config), "Fine.");
    }

    #[test]
    fn test_already_tagged_sentence_is_kept() {
        let config = Config::default();
        assert_eq!(
            insert_tags("[sigh] Fine. Whatever.", &Fixed("laugh", 1.0), &config),
            "[sigh] Fine. [laugh] Whatever."
        );
    }

    #[test]
    fn test_disabled_is_identity() {
        let config = Config {
            tagger_enabled: false,
            ..Config::default()
        };
        let text = " keep\n  this.  exactly ";
        assert_eq!(insert_tags(text, &Fixed("laugh", 1.0), &config), text);
    }

    #[test]
    fn test_builtin_model_tags_laughter() {
        let config = Config::default();
        let out = insert_tags("haha that was funny.", &ClassifierModel::builtin(), &config);
        assert_eq!(out, "[laugh] haha that was funny.");
    }

    #[test]
    fn test_dyn_classifier() {
        let config = Config::default();
        let classifier: Box<dyn Classifier> = Box::new(Fixed("gasp", 0.8));
        assert_eq!(
            insert_tags("Oh no!", &*classifier, &config),
            "[gasp] Oh no!"
        );
    }
}
