//! Speakable text for speech synthesis
//!
//! This crate turns free-form written text into plain text a speech engine
//! can read aloud without stumbling: numbers, clock times, units, versions,
//! addresses, URLs, emails, paths, acronyms and emoji are all rewritten into
//! words. A second, optional layer classifies each sentence with a small
//! Naive Bayes model and inserts reaction markers such as `[laugh]` that the
//! speech engine understands.
//!
//! # Architecture
//!
//! - **Normalization engine** ([`normalize`]): an ordered list of pure
//!   rewrite stages, with already-present markers protected for the whole
//!   run
//! - **Reaction classifier** ([`classifier`]): immutable multinomial Naive
//!   Bayes model, trained in memory or reconstructed from a snapshot
//! - **Tag insertion** ([`tagger`]): one tagging decision per sentence
//!
//! Nothing here touches the filesystem or the process environment; callers
//! resolve a [`Config`] and a [`ClassifierModel`] and pass them in.
//!
//! # Example
//!
//! ```rust
//! use sayable_core::{insert_tags, normalize, ClassifierModel, Config};
//!
//! let config = Config::default();
//! let model = ClassifierModel::builtin();
//!
//! let text = normalize("haha that was funny. The GPU runs at 3.5GHz.", &config);
//! assert_eq!(
//!     text,
//!     "haha that was funny. The g p u runs at three point five gigahertz."
//! );
//!
//! let tagged = insert_tags(&text, &model, &config);
//! assert!(tagged.starts_with("[laugh] haha that was funny."));
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod normalize;
pub mod tagger;

pub use classifier::{
    train, train_with_alpha, Classifier, ClassifierModel, ModelSnapshot, Prediction,
};
pub use config::Config;
pub use error::{ClassifierError, ConfigError};
pub use normalize::{normalize, Normalizer};
pub use tagger::insert_tags;

/// Normalize `text` and then insert reaction markers
pub fn process<C>(text: &str, classifier: &C, config: &Config) -> String
where
    C: Classifier + ?Sized,
{
    insert_tags(&normalize(text, config), classifier, config)
}
