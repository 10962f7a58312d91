//! Error types for input normalization and scenario loading.
//!
//! The solvers themselves are total over well-formed input and never fail.
//! Everything that can go wrong happens before a solver is called: a project
//! record is missing a field, carries non-numeric text, the values sum past
//! `u64::MAX`, or a scenario file cannot be read or parsed.

use thiserror::Error;

/// A malformed project record rejected by
/// [`normalize_records`](crate::normalize::normalize_records).
///
/// `index` is the position of the offending record in its input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("project #{index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("project #{index}: field `{field}` is not an integer: {raw:?}")]
    NotAnInteger {
        index: usize,
        field: &'static str,
        raw: String,
    },

    #[error("project #{index}: field `{field}` must be non-negative, got {raw}")]
    Negative {
        index: usize,
        field: &'static str,
        raw: i64,
    },

    #[error("project #{index}: total value exceeds u64::MAX")]
    TotalValueOverflow { index: usize },
}

/// Scenario file error.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("scenario '{label}': {source}")]
    Input {
        label: String,
        #[source]
        source: InputError,
    },

    #[error("Invalid scenario: {0}")]
    Invalid(String),
}
