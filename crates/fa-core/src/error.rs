//! Workspace error type.
//!
//! Every variant is a data-integrity or configuration failure detected while
//! constructing the structure it concerns (catalog, adjacency matrix, or
//! ranking request).  None of them are recoverable locally; callers surface
//! them to the user.

use thiserror::Error;

/// The error type shared by `fa-graph` and `fa-rank`.
#[derive(Debug, Error, PartialEq)]
pub enum FaError {
    #[error("node code {0:?} appears more than once")]
    DuplicateIdentity(String),

    #[error("edge references unknown node {0:?}")]
    UnknownNode(String),

    #[error("invalid weight {weight} on edge {from} - {to}: must be finite and non-negative")]
    InvalidWeight {
        from:   String,
        to:     String,
        weight: f64,
    },

    #[error("sample size {k} outside 1..={stores} (store count)")]
    InvalidSampleSize { k: usize, stores: usize },

    #[error("index {index} out of range for {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("node position {0} exceeds the u32 index space")]
    IndexOverflow(usize),
}

/// Shorthand result type for all `fa-*` crates.
pub type FaResult<T> = Result<T, FaError>;
