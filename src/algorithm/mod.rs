//! Algorithm implementations for kinship inference
//!
//! This module contains the pure query functions run against a built
//! `FamilyTree`: relative resolution, ancestor traversal, relationship
//! classification and the name lookup used by pairwise queries.

pub mod kinship;
pub mod lookup;

// Re-export commonly used items
pub use kinship::{Classification, Lineage, Relationship, Relative, classify, get_relatives};
pub use lookup::{LookupStrategy, find_by_name};
