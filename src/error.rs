//! Error types for trellis inference.
//!
//! Only malformed shapes are errors. Rows of A, B or pi that are not
//! probability distributions are accepted and simply produce meaningless
//! numbers, and long sequences may underflow to zero; neither is reported.

use thiserror::Error;

/// Result type alias for inference operations.
pub type Result<T> = std::result::Result<T, HmmError>;

/// Top-level error returned by model construction and the inference operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HmmError {
    /// Model matrices or the observation sequence have inconsistent dimensions.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
}

/// The specific dimension that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    #[error("model has no states")]
    NoStates,

    #[error("emission matrix has no symbol columns")]
    NoSymbols,

    #[error("transition row {row} has {len} entries, expected {expected}")]
    TransitionRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("emission matrix has {rows} rows, expected {expected}")]
    EmissionRows { rows: usize, expected: usize },

    #[error("emission row {row} has {len} entries, expected {expected}")]
    EmissionRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("initial distribution has {len} entries, expected {expected}")]
    InitialLength { len: usize, expected: usize },

    #[error("observation sequence is empty")]
    EmptyObservations,

    #[error("observation {symbol} at t = {t} is outside the alphabet 0..{alphabet}")]
    SymbolOutOfRange {
        t: usize,
        symbol: usize,
        alphabet: usize,
    },

    #[error("state path has {len} entries but {expected} observations were given")]
    PathLength { len: usize, expected: usize },

    #[error("state {state} at t = {t} is outside 0..{n_states}")]
    StateOutOfRange {
        t: usize,
        state: usize,
        n_states: usize,
    },

    #[error("trellis holds {len} cells, expected {expected}")]
    TrellisCells { len: usize, expected: usize },

    #[error("trellis is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    TrellisShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}
