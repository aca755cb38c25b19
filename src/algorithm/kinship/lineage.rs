//! Lineage snapshot of an individual
//!
//! This module assembles the structured relative listing used to present an
//! individual's immediate family: parents, both pairs of grandparents,
//! siblings, spouses and children.

use super::parentage::{children_of, parents_of, spouses_of};
use super::siblings::siblings_of;
use super::Relative;
use crate::models::{ChildRelation, FamilyTree, Individual, SiblingType, SpouseStatus};
use serde::Serialize;

/// Immediate relatives of one individual
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lineage<'a> {
    /// Father then mother, whichever are known
    #[serde(rename = "Parents")]
    pub parents: Vec<&'a Individual>,
    /// Parents of the father
    #[serde(rename = "Paternal Grandparents")]
    pub paternal_grandparents: Vec<&'a Individual>,
    /// Parents of the mother
    #[serde(rename = "Maternal Grandparents")]
    pub maternal_grandparents: Vec<&'a Individual>,
    /// Siblings sorted by display name
    #[serde(rename = "Siblings")]
    pub siblings: Vec<Relative<'a, SiblingType>>,
    /// Spouses across all families
    #[serde(rename = "Spouse")]
    pub spouses: Vec<Relative<'a, SpouseStatus>>,
    /// Children across all families
    #[serde(rename = "Children")]
    pub children: Vec<Relative<'a, ChildRelation>>,
}

impl<'a> Lineage<'a> {
    /// Both pairs of grandparents, paternal first
    pub fn grandparents(&self) -> impl Iterator<Item = &'a Individual> + '_ {
        self.paternal_grandparents
            .iter()
            .chain(&self.maternal_grandparents)
            .copied()
    }

    /// Parents, siblings and children, in that order
    pub fn close_relatives(&self) -> impl Iterator<Item = &'a Individual> + '_ {
        self.parents
            .iter()
            .copied()
            .chain(self.siblings.iter().map(|sibling| sibling.individual))
            .chain(self.children.iter().map(|child| child.individual))
    }

    /// First grandparent this lineage shares with another
    #[must_use]
    pub fn shared_grandparent(&self, other: &Lineage<'_>) -> Option<&'a Individual> {
        self.grandparents()
            .find(|mine| other.grandparents().any(|theirs| theirs.id == mine.id))
    }

    /// First parent, sibling or child this lineage shares with another
    #[must_use]
    pub fn shared_close_relative(&self, other: &Lineage<'_>) -> Option<&'a Individual> {
        self.close_relatives()
            .find(|mine| other.close_relatives().any(|theirs| theirs.id == mine.id))
    }

    /// Whether the lineage lists nobody
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
            && self.siblings.is_empty()
            && self.spouses.is_empty()
            && self.children.is_empty()
    }
}

/// Build the lineage snapshot of an individual.
///
/// An unknown id yields an empty lineage.
#[must_use]
pub fn get_relatives<'a>(tree: &'a FamilyTree, individual_id: &str) -> Lineage<'a> {
    if tree.find_individual(individual_id).is_none() {
        return Lineage::default();
    }

    let parents = parents_of(tree, individual_id);
    let grandparents_through = |parent: Option<&'a Individual>| -> Vec<&'a Individual> {
        parent
            .map(|parent| parents_of(tree, &parent.id).iter().collect())
            .unwrap_or_default()
    };

    Lineage {
        parents: parents.iter().collect(),
        paternal_grandparents: grandparents_through(parents.father),
        maternal_grandparents: grandparents_through(parents.mother),
        siblings: siblings_of(tree, individual_id),
        spouses: spouses_of(tree, individual_id),
        children: children_of(tree, individual_id),
    }
}
