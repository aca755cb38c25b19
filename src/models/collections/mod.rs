//! Collections module
//!
//! This module contains the indexed collections the kinship queries read
//! from, and the `FamilyTree` index that bundles them.

pub mod collection_traits;
pub mod entity_collection;
pub mod family_tree;

pub use collection_traits::*;
pub use entity_collection::EntityCollection;
pub use family_tree::FamilyTree;
