//! Relationship engine
//!
//! `RelationshipEngine` owns a built [`FamilyTree`] and the generation bounds
//! used by the classifier. It is the surface the presentation side talks to:
//! pairwise relationship sentences and lineage listings.
//!
//! The engine holds no mutable state after construction, so a shared
//! reference can serve concurrent read-only queries.

use crate::algorithm::kinship::{Classification, Lineage, classify, get_relatives};
use crate::algorithm::lookup::find_by_name;
use crate::config::SearchDepths;
use crate::error::{ResolveError, Result};
use crate::models::{Family, FamilyTree, Individual};
use crate::snapshot::Snapshot;
use log::debug;
use std::path::Path;

/// Answers relationship queries over an immutable family tree
#[derive(Debug, Clone)]
pub struct RelationshipEngine {
    tree: FamilyTree,
    depths: SearchDepths,
}

impl RelationshipEngine {
    /// Create an engine over an already built tree with default bounds
    #[must_use]
    pub fn new(tree: FamilyTree) -> Self {
        Self {
            tree,
            depths: SearchDepths::default(),
        }
    }

    /// Index individuals and families and create an engine over them
    #[must_use]
    pub fn build_index(
        individuals: impl IntoIterator<Item = Individual>,
        families: impl IntoIterator<Item = Family>,
    ) -> Self {
        Self::new(FamilyTree::new(individuals, families))
    }

    /// Create an engine from a parsed snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::new(snapshot.into_tree())
    }

    /// Load a JSON snapshot file and create an engine over it
    pub fn from_path(path: &Path) -> Result<Self> {
        Snapshot::from_path(path).map(Self::from_snapshot)
    }

    /// Replace the generation bounds used by the classifier
    #[must_use]
    pub fn with_depths(mut self, depths: SearchDepths) -> Self {
        self.depths = depths;
        self
    }

    /// The indexed tree
    #[must_use]
    pub const fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    /// The generation bounds in use
    #[must_use]
    pub const fn depths(&self) -> &SearchDepths {
        &self.depths
    }

    /// Classify two individuals by id.
    ///
    /// Returns `None` if either id is not indexed.
    #[must_use]
    pub fn classify(&self, id1: &str, id2: &str) -> Option<Classification<'_>> {
        classify(&self.tree, &self.depths, id1, id2)
    }

    /// Resolve two typed names (or ids) and classify them
    pub fn try_resolve(
        &self,
        query1: &str,
        query2: &str,
    ) -> std::result::Result<Classification<'_>, ResolveError> {
        if query1.is_empty() || query2.is_empty() {
            return Err(ResolveError::MissingInput);
        }
        if query1 == query2 {
            return Err(ResolveError::AmbiguousInput);
        }

        let first = find_by_name(&self.tree, query1).ok_or(ResolveError::NotFound)?;
        let second = find_by_name(&self.tree, query2).ok_or(ResolveError::NotFound)?;
        debug!(
            "Resolved {query1:?} to {} and {query2:?} to {}",
            first.id, second.id
        );

        self.classify(&first.id, &second.id)
            .ok_or(ResolveError::NotFound)
    }

    /// Describe the relationship between two typed names (or ids) as a sentence.
    ///
    /// Input problems are answered with their fixed sentinel sentences.
    #[must_use]
    pub fn resolve_relationship(&self, query1: &str, query2: &str) -> String {
        match self.try_resolve(query1, query2) {
            Ok(classification) => classification.describe(),
            Err(err) => err.to_string(),
        }
    }

    /// Immediate relatives of an individual; empty for an unknown id
    #[must_use]
    pub fn get_relatives(&self, individual_id: &str) -> Lineage<'_> {
        get_relatives(&self.tree, individual_id)
    }
}
