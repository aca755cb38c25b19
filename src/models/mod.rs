//! Domain models for family-history data
//!
//! This module contains the entity models (individuals and families), the
//! shared enum types and the indexed collections built from them.

pub mod collections;
pub mod family;
pub mod individual;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use collections::{FamilyTree, ModelCollection};
pub use family::{ChildEntry, Family};
pub use individual::Individual;
pub use traits::EntityModel;
pub use types::{ChildRelation, Gender, Side, SiblingType, SpouseStatus};
