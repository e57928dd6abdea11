//! Error types
//!
//! Normalization and tag insertion are total and have no error type. Only
//! classifier training, snapshot reconstruction and configuration validation
//! can fail.

use thiserror::Error;

/// Errors raised while training or reconstructing a classifier model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// No training examples were supplied
    #[error("cannot train a classifier from an empty training set")]
    EmptyTrainingSet,

    /// Smoothing constant is not a positive finite number
    #[error("smoothing constant must be positive and finite, got {0}")]
    InvalidSmoothing(f64),

    /// A persisted snapshot is not a usable model
    #[error("invalid model snapshot: {0}")]
    InvalidModel(String),
}

/// Errors reported by [`Config::validate`](crate::Config::validate)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Tag confidence threshold outside of [0, 1]
    #[error("tag_min_confidence must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f64),

    /// Allowed tag is not a single bracketed token
    #[error("allowed tag '{0}' must look like '[name]' with letters and spaces only")]
    MalformedTag(String),

    /// Label maps to a tag that is not in `allowed_tags`
    #[error("label '{label}' maps to '{tag}', which is not an allowed tag")]
    UnknownTagTarget {
        /// Classifier label
        label: String,
        /// Configured marker
        tag: String,
    },
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;
