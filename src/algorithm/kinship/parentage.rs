//! Parentage, spouse and child resolution
//!
//! Parents come from the individual's primary family-as-child link only.
//! Spouses and children come from every family-as-spouse link.

use super::Relative;
use crate::models::{ChildRelation, Family, FamilyTree, Individual, Side, SpouseStatus};
use rustc_hash::FxHashSet;

/// Father and mother of an individual, either of which may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parents<'a> {
    /// Husband of the primary child family
    pub father: Option<&'a Individual>,
    /// Wife of the primary child family
    pub mother: Option<&'a Individual>,
}

impl<'a> Parents<'a> {
    /// No known parents
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            father: None,
            mother: None,
        }
    }

    /// The parent on the given side
    #[must_use]
    pub const fn on_side(&self, side: Side) -> Option<&'a Individual> {
        match side {
            Side::Paternal => self.father,
            Side::Maternal => self.mother,
        }
    }

    /// Known parents with their side, father first
    pub fn by_side(&self) -> impl Iterator<Item = (Side, &'a Individual)> + use<'a> {
        let father = self.father.map(|father| (Side::Paternal, father));
        let mother = self.mother.map(|mother| (Side::Maternal, mother));
        father.into_iter().chain(mother)
    }

    /// Known parents, father first
    pub fn iter(&self) -> impl Iterator<Item = &'a Individual> + use<'a> {
        self.by_side().map(|(_, parent)| parent)
    }

    /// Whether the individual with `id` is one of these parents
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.iter().any(|parent| parent.id == id)
    }

    /// Side on which the individual with `id` is a parent, if any
    #[must_use]
    pub fn side_of(&self, id: &str) -> Option<Side> {
        self.by_side()
            .find(|(_, parent)| parent.id == id)
            .map(|(side, _)| side)
    }
}

/// The family an individual is a child of, following the first FAMC link
#[must_use]
pub fn primary_family<'a>(tree: &'a FamilyTree, individual: &Individual) -> Option<&'a Family> {
    individual
        .primary_family_as_child()
        .and_then(|family_id| tree.find_family(family_id))
}

/// Resolve the father and mother of an individual.
///
/// Any gap along the way (unknown individual, no FAMC link, unknown family,
/// dangling husband or wife) yields an unknown parent rather than an error.
#[must_use]
pub fn parents_of<'a>(tree: &'a FamilyTree, individual_id: &str) -> Parents<'a> {
    let Some(family) = tree
        .find_individual(individual_id)
        .and_then(|individual| primary_family(tree, individual))
    else {
        return Parents::unknown();
    };

    Parents {
        father: tree.resolve(family.husband.as_deref()),
        mother: tree.resolve(family.wife.as_deref()),
    }
}

/// Families in which an individual is a spouse, in FAMS order, skipping dangling links
pub fn spouse_families<'a>(
    tree: &'a FamilyTree,
    individual: &'a Individual,
) -> impl Iterator<Item = &'a Family> + use<'a> {
    individual
        .family_as_spouse
        .iter()
        .filter_map(|family_id| tree.find_family(family_id))
}

/// Spouses of an individual across all its families, without repeats
#[must_use]
pub fn spouses_of<'a>(
    tree: &'a FamilyTree,
    individual_id: &str,
) -> Vec<Relative<'a, SpouseStatus>> {
    let Some(individual) = tree.find_individual(individual_id) else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    spouse_families(tree, individual)
        .filter_map(|family| {
            let spouse = tree.resolve(family.partner_of(&individual.id))?;
            Some(Relative::new(spouse, family.status()))
        })
        .filter(|spouse| seen.insert(spouse.id()))
        .collect()
}

/// Children of an individual across all its families, without repeats.
///
/// A child entry flagged as adopted keeps that flag; the first family that
/// lists a child decides its relation.
#[must_use]
pub fn children_of<'a>(
    tree: &'a FamilyTree,
    individual_id: &str,
) -> Vec<Relative<'a, ChildRelation>> {
    let Some(individual) = tree.find_individual(individual_id) else {
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    spouse_families(tree, individual)
        .flat_map(|family| family.children.iter())
        .filter_map(|entry| {
            let child = tree.find_individual(&entry.id)?;
            Some(Relative::new(child, entry.relation))
        })
        .filter(|child| seen.insert(child.id()))
        .collect()
}
