//! Multinomial Naive Bayes training

use super::tokenizer::tokenize;
use super::ClassifierModel;
use crate::error::{ClassifierError, Result};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Laplace smoothing constant used by [`train`]
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Reaction corpus behind [`ClassifierModel::builtin`]
pub const DEFAULT_TRAINING: &[(&str, &str)] = &[
    ("haha that was funny", "laugh"),
    ("lol", "laugh"),
    ("lmao", "laugh"),
    ("this is hilarious", "laugh"),
    ("heh", "chuckle"),
    ("that made me chuckle", "chuckle"),
    ("hmm well okay", "chuckle"),
    ("ugh", "groan"),
    ("this is annoying", "groan"),
    ("oh no", "gasp"),
    ("wow", "gasp"),
    ("gosh", "gasp"),
    ("ahem", "clear_throat"),
    ("clearing my throat", "clear_throat"),
    ("shh", "shush"),
    ("shush", "shush"),
    ("sorry about that", "sigh"),
    ("i guess", "sigh"),
    ("cough", "cough"),
    ("coughing", "cough"),
    ("sniff", "sniff"),
    ("sniffing", "sniff"),
    ("okay", "none"),
    ("thanks", "none"),
    ("let us continue", "none"),
];

/// Per-label counts gathered in one pass over the examples
#[derive(Debug, Default)]
struct LabelCounts {
    documents: usize,
    tokens: BTreeMap<String, usize>,
}

impl LabelCounts {
    fn total_tokens(&self) -> usize {
        self.tokens.values().sum()
    }
}

/// Train with the default smoothing constant
pub fn train<T, L>(examples: &[(T, L)]) -> Result<ClassifierModel>
where
    T: AsRef<str>,
    L: AsRef<str>,
{
    train_with_alpha(examples, DEFAULT_ALPHA)
}

/// Train a model from `(text, label)` pairs with add-`alpha` smoothing
///
/// Likelihoods are computed for every (label, token) pair over the full
/// observed vocabulary, so a token seen under one label still has a smoothed
/// likelihood under every other label.
pub fn train_with_alpha<T, L>(examples: &[(T, L)], alpha: f64) -> Result<ClassifierModel>
where
    T: AsRef<str>,
    L: AsRef<str>,
{
    if examples.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(ClassifierError::InvalidSmoothing(alpha));
    }

    let mut counts: BTreeMap<String, LabelCounts> = BTreeMap::new();
    let mut vocab: BTreeSet<String> = BTreeSet::new();

    for (text, label) in examples {
        let entry = counts.entry(label.as_ref().to_string()).or_default();
        entry.documents += 1;
        for token in tokenize(text.as_ref()) {
            *entry.tokens.entry(token.clone()).or_default() += 1;
            vocab.insert(token);
        }
    }

    let total_documents = examples.len() as f64;
    let vocab_size = vocab.len() as f64;

    let mut log_priors = BTreeMap::new();
    let mut log_likelihoods = BTreeMap::new();

    for (label, label_counts) in &counts {
        log_priors.insert(
            label.clone(),
            (label_counts.documents as f64 / total_documents).ln(),
        );

        let denominator = label_counts.total_tokens() as f64 + alpha * vocab_size;
        let likelihoods: BTreeMap<String, f64> = vocab
            .iter()
            .map(|token| {
                let count = label_counts.tokens.get(token).copied().unwrap_or(0) as f64;
                (token.clone(), ((count + alpha) / denominator).ln())
            })
            .collect();
        log_likelihoods.insert(label.clone(), likelihoods);
    }

    debug!(
        examples = examples.len(),
        labels = counts.len(),
        vocab = vocab.len(),
        alpha,
        "trained classifier"
    );

    Ok(ClassifierModel::from_parts(
        counts.into_keys().collect(),
        log_priors,
        log_likelihoods,
        vocab,
        alpha,
    ))
}
