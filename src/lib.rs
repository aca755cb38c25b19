//! A Rust library for kinship inference over family-history data.
//!
//! The crate indexes individuals and families once, then answers two kinds of
//! read-only query against that index: the English description of how two
//! individuals are related ("Ann is Bob's paternal great aunt", "2nd cousins
//! once removed") and the structured listing of an individual's immediate
//! relatives.

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod phrase;
pub mod snapshot;

// Re-export the most common types for easier use
// Core types
pub use config::SearchDepths;
pub use engine::RelationshipEngine;
pub use error::{KinshipError, ResolveError, Result};
pub use snapshot::Snapshot;

// Entity models
pub use models::{
    ChildEntry, ChildRelation, Family, FamilyTree, Gender, Individual, ModelCollection, Side,
    SiblingType, SpouseStatus,
};

// Query results
pub use algorithm::{Classification, Lineage, Relationship, Relative};
pub use algorithm::{LookupStrategy, classify, find_by_name, get_relatives};
