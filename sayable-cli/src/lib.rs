//! Sayable CLI library
//!
//! This library provides the command-line driver around `sayable-core`:
//! input resolution, configuration and model loading, output formatting and
//! progress reporting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
