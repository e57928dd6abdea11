//! Persisted model shape

use super::ClassifierModel;
use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Serialized form of a [`ClassifierModel`]
///
/// ```json
/// {
///   "labels": ["laugh", "none"],
///   "log_priors": {"laugh": -0.69, "none": -0.69},
///   "log_likelihoods": {"laugh": {"haha": -0.4}, "none": {"haha": -1.1}},
///   "vocab": ["haha"],
///   "alpha": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub labels: Vec<String>,
    pub log_priors: BTreeMap<String, f64>,
    #[serde(default)]
    pub log_likelihoods: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub vocab: Vec<String>,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_alpha() -> f64 {
    super::training::DEFAULT_ALPHA
}

impl From<ClassifierModel> for ModelSnapshot {
    fn from(model: ClassifierModel) -> Self {
        Self {
            labels: model.labels,
            log_priors: model.log_priors,
            log_likelihoods: model.log_likelihoods,
            vocab: model.vocab.into_iter().collect(),
            alpha: model.alpha,
        }
    }
}

impl TryFrom<ModelSnapshot> for ClassifierModel {
    type Error = ClassifierError;

    fn try_from(snapshot: ModelSnapshot) -> Result<Self, Self::Error> {
        if snapshot.labels.is_empty() {
            return Err(ClassifierError::InvalidModel(
                "model has no labels".to_string(),
            ));
        }

        let labels: BTreeSet<String> = snapshot.labels.into_iter().collect();
        for label in &labels {
            match snapshot.log_priors.get(label) {
                Some(prior) if prior.is_finite() => {}
                Some(prior) => {
                    return Err(ClassifierError::InvalidModel(format!(
                        "label '{label}' has non-finite log prior {prior}"
                    )))
                }
                None => {
                    return Err(ClassifierError::InvalidModel(format!(
                        "label '{label}' has no log prior"
                    )))
                }
            }
        }

        Ok(ClassifierModel::from_parts(
            labels.into_iter().collect(),
            snapshot.log_priors,
            snapshot.log_likelihoods,
            snapshot.vocab.into_iter().collect(),
            snapshot.alpha,
        ))
    }
}
