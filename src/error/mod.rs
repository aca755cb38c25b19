//! Error handling for the kinship engine.
//!
//! Two kinds of failure exist. `KinshipError` covers the edges of the crate
//! where input is read (snapshot files and JSON). `ResolveError` is the small
//! taxonomy of user input problems for a relationship query; its display
//! strings are the sentinel answers shown to the user.
//!
//! Structural gaps in the data (missing parents, dangling family pointers)
//! and exhausted search bounds are not errors at all: they show up as `None`
//! or empty results and let the relationship pipeline fall through.

use std::io;

/// Errors raised while loading family-tree data
#[derive(Debug, thiserror::Error)]
pub enum KinshipError {
    /// Error opening or reading a snapshot file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Snapshot is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Snapshot parsed but violates a data model rule
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for kinship operations
pub type Result<T> = std::result::Result<T, KinshipError>;

/// Reasons a relationship query cannot be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// One or both names are empty
    #[error("Please provide two names.")]
    MissingInput,

    /// The two inputs are the same text
    #[error("Please provide two different names.")]
    AmbiguousInput,

    /// A name does not resolve to any indexed individual
    #[error("One or both people not found.")]
    NotFound,
}
