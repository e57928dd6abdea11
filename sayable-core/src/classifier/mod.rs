//! Reaction classifier
//!
//! A multinomial Naive Bayes model scores a short span of text against a
//! fixed set of reaction labels. Models are immutable values: training
//! produces a new [`ClassifierModel`], and a model loaded from a
//! [`ModelSnapshot`] predicts exactly like the one that was saved.

mod snapshot;
mod tokenizer;
mod training;

pub use snapshot::ModelSnapshot;
pub use tokenizer::tokenize;
pub use training::{train, train_with_alpha, DEFAULT_ALPHA, DEFAULT_TRAINING};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Winning label and its softmax probability
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Probability mass of `label`, within [0, 1]
    pub confidence: f64,
}

/// Anything that can pick a reaction label for a sentence
pub trait Classifier: Send + Sync {
    /// Most probable label for `text`
    fn predict(&self, text: &str) -> Prediction;
}

/// Trained Naive Bayes model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelSnapshot", into = "ModelSnapshot")]
pub struct ClassifierModel {
    labels: Vec<String>,
    log_priors: BTreeMap<String, f64>,
    log_likelihoods: BTreeMap<String, BTreeMap<String, f64>>,
    vocab: BTreeSet<String>,
    alpha: f64,
}

impl ClassifierModel {
    /// `labels` must already be sorted and unique
    pub(crate) fn from_parts(
        labels: Vec<String>,
        log_priors: BTreeMap<String, f64>,
        log_likelihoods: BTreeMap<String, BTreeMap<String, f64>>,
        vocab: BTreeSet<String>,
        alpha: f64,
    ) -> Self {
        Self {
            labels,
            log_priors,
            log_likelihoods,
            vocab,
            alpha,
        }
    }

    /// Model trained on the built-in reaction corpus
    pub fn builtin() -> Self {
        match train(DEFAULT_TRAINING) {
            Ok(model) => model,
            // The corpus is a non-empty constant and the default alpha is valid
            Err(_) => unreachable!("built-in corpus always trains"),
        }
    }

    /// Sorted label list
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn vocab(&self) -> &BTreeSet<String> {
        &self.vocab
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn log_prior(&self, label: &str) -> Option<f64> {
        self.log_priors.get(label).copied()
    }

    pub fn log_likelihood(&self, label: &str, token: &str) -> Option<f64> {
        self.log_likelihoods.get(label)?.get(token).copied()
    }

    /// Log-space score of every label, in label order. Tokens a label has no
    /// likelihood for are skipped.
    pub fn scores(&self, text: &str) -> Vec<f64> {
        let tokens = tokenize(text);
        self.labels
            .iter()
            .map(|label| {
                let prior = self.log_prior(label).unwrap_or(f64::NEG_INFINITY);
                let likelihoods = self.log_likelihoods.get(label);
                tokens
                    .iter()
                    .filter_map(|token| likelihoods.and_then(|ll| ll.get(token)))
                    .fold(prior, |score, ll| score + ll)
            })
            .collect()
    }

    /// Most probable label with its softmax confidence
    ///
    /// Ties go to the earliest label in sorted order.
    pub fn predict(&self, text: &str) -> Prediction {
        let scores = self.scores(text);

        let mut best = 0;
        for (index, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = index;
            }
        }

        Prediction {
            label: self.labels.get(best).cloned().unwrap_or_default(),
            confidence: softmax_mass(&scores, best),
        }
    }
}

impl Classifier for ClassifierModel {
    fn predict(&self, text: &str) -> Prediction {
        ClassifierModel::predict(self, text)
    }
}

impl Default for ClassifierModel {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Probability of `scores[index]` under a max-shifted softmax
fn softmax_mass(scores: &[f64], index: usize) -> f64 {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores
        .iter()
        .map(|score| {
            let e = (score - max).exp();
            if e.is_finite() {
                e
            } else {
                0.0
            }
        })
        .collect();

    let total: f64 = exps.iter().sum();
    let total = if total == 0.0 { 1.0 } else { total };
    exps.get(index)
        .map_or(0.0, |e| (e / total).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_laugh() {
        let model = ClassifierModel::builtin();
        let prediction = model.predict("haha that was funny.");
        assert_eq!(prediction.label, "laugh");
        assert!((prediction.confidence - 0.626).abs() < 0.01);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_priors() {
        let model = ClassifierModel::builtin();
        let prediction = model.predict("hello world");
        // laugh has the most examples (4 of 25)
        assert_eq!(prediction.label, "laugh");
        assert!((prediction.confidence - 0.16).abs() < 1e-9);
    }

    #[test]
    fn test_ties_go_to_first_label() {
        let model = train(&[("same", "beta"), ("same", "alpha")]).unwrap();
        let prediction = model.predict("same");
        assert_eq!(prediction.label, "alpha");
        assert!((prediction.confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_label_is_certain() {
        let model = train(&[("only one", "sigh")]).unwrap();
        assert_eq!(
            model.predict("one more"),
            Prediction {
                label: "sigh".to_string(),
                confidence: 1.0
            }
        );
    }

    #[test]
    fn test_softmax_degenerate_scores() {
        assert_eq!(softmax_mass(&[f64::NEG_INFINITY, f64::NEG_INFINITY], 0), 0.0);
        assert!((softmax_mass(&[0.0, 0.0, 0.0, 0.0], 2) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_trait_object() {
        let model = ClassifierModel::builtin();
        let classifier: &dyn Classifier = &model;
        assert_eq!(classifier.predict("lol").label, "laugh");
    }
}
