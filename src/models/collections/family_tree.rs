//! Family tree index
//!
//! The `FamilyTree` is the read-only entity index every kinship query runs
//! against. It is built once from the snapshot handed over by the ingestion
//! side and never mutated afterwards, so any number of readers can share it.

use crate::models::collections::collection_traits::ModelCollection;
use crate::models::collections::entity_collection::EntityCollection;
use crate::models::family::Family;
use crate::models::individual::Individual;
use log::{info, warn};

/// Immutable lookup tables over the individuals and families of one dataset
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    individuals: EntityCollection<Individual>,
    families: EntityCollection<Family>,
}

impl FamilyTree {
    /// Build the index from raw individual and family collections
    #[must_use]
    pub fn new(
        individuals: impl IntoIterator<Item = Individual>,
        families: impl IntoIterator<Item = Family>,
    ) -> Self {
        let tree = Self {
            individuals: EntityCollection::with_entities(individuals),
            families: EntityCollection::with_entities(families),
        };

        let dangling = tree.dangling_reference_count();
        if dangling > 0 {
            warn!("{dangling} family references do not resolve and will be treated as unknown");
        }
        info!(
            "Indexed {} individuals and {} families",
            tree.individuals.count(),
            tree.families.count()
        );
        tree
    }

    /// Look up an individual by id; an empty or unknown id yields `None`
    #[must_use]
    pub fn find_individual(&self, id: &str) -> Option<&Individual> {
        if id.is_empty() {
            return None;
        }
        self.individuals.get(id)
    }

    /// Look up a family by id; an empty or unknown id yields `None`
    #[must_use]
    pub fn find_family(&self, id: &str) -> Option<&Family> {
        if id.is_empty() {
            return None;
        }
        self.families.get(id)
    }

    /// Resolve an optional individual reference
    #[must_use]
    pub fn resolve(&self, id: Option<&str>) -> Option<&Individual> {
        id.and_then(|id| self.find_individual(id))
    }

    /// The indexed individuals
    #[must_use]
    pub const fn individuals(&self) -> &EntityCollection<Individual> {
        &self.individuals
    }

    /// The indexed families
    #[must_use]
    pub const fn families(&self) -> &EntityCollection<Family> {
        &self.families
    }

    /// Count references (FAMC/FAMS on individuals, members on families) that
    /// point at nothing in this index
    #[must_use]
    pub fn dangling_reference_count(&self) -> usize {
        let from_individuals = self
            .individuals
            .all()
            .iter()
            .flat_map(|ind| ind.family_as_child.iter().chain(&ind.family_as_spouse))
            .filter(|fam| !self.families.contains(fam))
            .count();
        let from_families = self
            .families
            .all()
            .iter()
            .flat_map(Family::member_ids)
            .filter(|id| !self.individuals.contains(id))
            .count();
        from_individuals + from_families
    }
}
