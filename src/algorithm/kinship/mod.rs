//! Kinship inference
//!
//! The resolvers in this module are pure functions over a `FamilyTree`. The
//! lineage listing and the pairwise classifier both call the same resolvers,
//! so a relative shown in a listing is the relative the classifier reasons
//! about.

pub mod ancestors;
pub mod classifier;
pub mod common_ancestor;
pub mod lineage;
pub mod parentage;
pub mod siblings;

use crate::models::Individual;
use serde::Serialize;

/// A resolved relative together with the qualifier of the relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relative<'a, K> {
    /// The related individual
    pub individual: &'a Individual,
    /// Qualifier of the relation (sibling type, spouse status, child relation)
    pub kind: K,
}

impl<'a, K> Relative<'a, K> {
    /// Pair an individual with the qualifier of its relation
    #[must_use]
    pub const fn new(individual: &'a Individual, kind: K) -> Self {
        Self { individual, kind }
    }

    /// Id of the related individual
    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.individual.id
    }
}

/// Find the relative with the given id in a listing
pub(crate) fn find_relative<'r, 'a, K>(
    relatives: &'r [Relative<'a, K>],
    id: &str,
) -> Option<&'r Relative<'a, K>> {
    relatives.iter().find(|relative| relative.individual.id == id)
}

pub use ancestors::{
    AncestorPath, AncestorSibling, ancestor_generations, ancestor_path, ancestor_sibling,
};
pub use classifier::{Classification, InLawKind, Relationship, Role, classify};
pub use common_ancestor::{CommonAncestor, nearest_common_ancestor};
pub use lineage::{Lineage, get_relatives};
pub use parentage::{Parents, children_of, parents_of, spouses_of};
pub use siblings::siblings_of;
