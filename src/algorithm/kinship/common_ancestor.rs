//! Nearest common ancestor search

use super::ancestors::ancestor_generations;
use crate::models::{FamilyTree, Individual};

/// The closest ancestor shared by two individuals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonAncestor<'a> {
    /// The shared ancestor
    pub ancestor: &'a Individual,
    /// Generation distance from the first individual
    pub gen1: usize,
    /// Generation distance from the second individual
    pub gen2: usize,
}

impl CommonAncestor<'_> {
    /// Combined distance through this ancestor
    #[must_use]
    pub const fn total_distance(&self) -> usize {
        self.gen1 + self.gen2
    }
}

/// Find the ancestor shared by both individuals that minimizes `gen1 + gen2`.
///
/// Each individual counts as its own ancestor at generation 0. Ties on the
/// summed distance go to the smaller `max(gen1, gen2)`, then to the smaller
/// ancestor id, so the answer never depends on hash iteration order.
#[must_use]
pub fn nearest_common_ancestor<'a>(
    tree: &'a FamilyTree,
    id1: &str,
    id2: &str,
    max_generations: usize,
) -> Option<CommonAncestor<'a>> {
    let first = ancestor_generations(tree, id1, max_generations);
    let second = ancestor_generations(tree, id2, max_generations);

    first
        .iter()
        .filter_map(|(&ancestor_id, &gen1)| {
            second
                .get(ancestor_id)
                .map(|&gen2| (ancestor_id, gen1, gen2))
        })
        .min_by_key(|&(ancestor_id, gen1, gen2)| (gen1 + gen2, gen1.max(gen2), ancestor_id))
        .and_then(|(ancestor_id, gen1, gen2)| {
            tree.find_individual(ancestor_id)
                .map(|ancestor| CommonAncestor { ancestor, gen1, gen2 })
        })
}
