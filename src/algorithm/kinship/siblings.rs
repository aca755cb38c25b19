//! Sibling resolution
//!
//! Siblings are gathered along three paths: the co-children of the primary
//! child family, the children of the father's other families and the
//! children of the mother's other families. A sibling reached along several
//! paths keeps the strongest classification.

use super::Relative;
use super::parentage::{Parents, parents_of};
use crate::models::{ChildEntry, FamilyTree, Individual, SiblingType};
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Collects sibling candidates, merging repeats by id
struct SiblingSet<'a> {
    subject_id: &'a str,
    found: Vec<Relative<'a, SiblingType>>,
    positions: FxHashMap<&'a str, usize>,
}

impl<'a> SiblingSet<'a> {
    fn new(subject_id: &'a str) -> Self {
        Self {
            subject_id,
            found: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn add(&mut self, sibling: &'a Individual, kind: SiblingType) {
        if sibling.id == self.subject_id {
            return;
        }
        match self.positions.get(sibling.id.as_str()) {
            Some(&pos) => {
                let existing = &mut self.found[pos];
                if kind.precedence() < existing.kind.precedence() {
                    existing.kind = kind;
                }
            }
            None => {
                self.positions.insert(&sibling.id, self.found.len());
                self.found.push(Relative::new(sibling, kind));
            }
        }
    }

    /// Siblings sorted by display name, ignoring case
    fn into_sorted(self) -> Vec<Relative<'a, SiblingType>> {
        self.found
            .into_iter()
            .sorted_by_cached_key(|sibling| sibling.individual.name.to_lowercase())
            .collect()
    }
}

/// Classify a co-child of the subject's own child family
fn classify_co_child(
    subject_parents: &Parents<'_>,
    sibling_parents: &Parents<'_>,
    entry: &ChildEntry,
) -> SiblingType {
    let shares = |ours: Option<&Individual>, theirs: Option<&Individual>| {
        matches!((ours, theirs), (Some(ours), Some(theirs)) if ours.id == theirs.id)
    };
    let shares_father = shares(subject_parents.father, sibling_parents.father);
    let shares_mother = shares(subject_parents.mother, sibling_parents.mother);

    match (shares_father, shares_mother) {
        (true, false) => SiblingType::PaternalHalf,
        (false, true) => SiblingType::MaternalHalf,
        (false, false) if entry.relation.is_adopted() => SiblingType::Adopted,
        // Same family with nothing to tell them apart
        _ => SiblingType::Full,
    }
}

/// Enumerate the siblings of an individual with their classification.
///
/// The result is sorted by display name, case-insensitively. An unknown
/// individual has no siblings.
#[must_use]
pub fn siblings_of<'a>(
    tree: &'a FamilyTree,
    individual_id: &str,
) -> Vec<Relative<'a, SiblingType>> {
    let Some(subject) = tree.find_individual(individual_id) else {
        return Vec::new();
    };
    let parents = parents_of(tree, &subject.id);
    let primary_family_id = subject.primary_family_as_child();
    let mut siblings = SiblingSet::new(&subject.id);

    if let Some(family) = primary_family_id.and_then(|id| tree.find_family(id)) {
        for entry in &family.children {
            let Some(sibling) = tree.find_individual(&entry.id) else {
                continue;
            };
            let sibling_parents = parents_of(tree, &sibling.id);
            siblings.add(sibling, classify_co_child(&parents, &sibling_parents, entry));
        }
    }

    let other_families = [
        (parents.father, SiblingType::PaternalHalf, SiblingType::AdoptedPaternal),
        (parents.mother, SiblingType::MaternalHalf, SiblingType::AdoptedMaternal),
    ];
    for (parent, half, adopted) in other_families {
        let Some(parent) = parent else {
            continue;
        };
        let families = parent
            .family_as_spouse
            .iter()
            .filter(|family_id| Some(family_id.as_str()) != primary_family_id)
            .filter_map(|family_id| tree.find_family(family_id));
        for family in families {
            for entry in &family.children {
                if let Some(sibling) = tree.find_individual(&entry.id) {
                    let kind = if entry.relation.is_adopted() { adopted } else { half };
                    siblings.add(sibling, kind);
                }
            }
        }
    }

    siblings.into_sorted()
}
