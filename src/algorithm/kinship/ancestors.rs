//! Ancestor traversal
//!
//! Every walk here goes up the parent chain with a hard generation bound and
//! a visited set, so malformed (cyclic) data cannot make a search run away.
//! Running into the bound is "not found", never an error.

use super::parentage::parents_of;
use super::siblings::siblings_of;
use crate::models::{FamilyTree, Individual, Side, SiblingType};
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Sides taken on the way up, one per generation
type SidePath = SmallVec<[Side; 16]>;

/// A discovered line from a descendant up to one of its ancestors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorPath {
    /// Number of parent links between descendant and ancestor
    pub generation: usize,
    /// Branch taken at the top of the path, next to the ancestor
    pub side: Side,
    /// Branch taken at the bottom of the path, next to the descendant
    pub lineage_side: Side,
}

/// A sibling of one of the subject's ancestors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorSibling<'a> {
    /// Generation of the ancestor the target is a sibling of
    pub generation: usize,
    /// Branch taken at the first step up from the subject
    pub side: Side,
    /// The ancestor whose sibling the target is
    pub ancestor: &'a Individual,
    /// How the target is a sibling of that ancestor
    pub sibling_type: SiblingType,
}

/// Depth-first upward walk, father branch fully before mother branch
struct UpwardWalk<'a, 't> {
    tree: &'a FamilyTree,
    max_generations: usize,
    path: SidePath,
    on_path: FxHashSet<&'a str>,
    target: &'t str,
}

impl<'a, 't> UpwardWalk<'a, 't> {
    fn new(
        tree: &'a FamilyTree,
        from: &'a Individual,
        target: &'t str,
        max_generations: usize,
    ) -> Self {
        let mut on_path = FxHashSet::default();
        on_path.insert(from.id.as_str());
        Self {
            tree,
            max_generations,
            path: SidePath::new(),
            on_path,
            target,
        }
    }

    /// Visit the ancestors of `current`, calling `visit` on each until it
    /// returns a value
    fn walk<R>(
        &mut self,
        current: &'a Individual,
        visit: &mut impl FnMut(&Self, &'a Individual) -> Option<R>,
    ) -> Option<R> {
        if self.path.len() >= self.max_generations {
            trace!("Generation bound {} reached above {}", self.max_generations, current.id);
            return None;
        }

        let parents = parents_of(self.tree, &current.id);
        for (side, parent) in parents.by_side() {
            if !self.on_path.insert(parent.id.as_str()) {
                trace!("Cycle through {} skipped", parent.id);
                continue;
            }
            self.path.push(side);

            let found = visit(self, parent).or_else(|| self.walk(parent, visit));

            self.path.pop();
            self.on_path.remove(parent.id.as_str());
            if found.is_some() {
                return found;
            }
        }
        None
    }

    fn generation(&self) -> usize {
        self.path.len()
    }

    fn top_side(&self) -> Option<Side> {
        self.path.last().copied()
    }

    fn lineage_side(&self) -> Option<Side> {
        self.path.first().copied()
    }
}

/// Find `to_id` among the ancestors of `from_id`.
///
/// The walk is depth-first and paternal-first, so with pedigree collapse the
/// path returned is the first one found that way, not necessarily the
/// shortest. An individual is not its own ancestor.
#[must_use]
pub fn ancestor_path(
    tree: &FamilyTree,
    from_id: &str,
    to_id: &str,
    max_generations: usize,
) -> Option<AncestorPath> {
    let from = tree.find_individual(from_id)?;
    let mut walk = UpwardWalk::new(tree, from, to_id, max_generations);

    walk.walk(from, &mut |walk, ancestor| {
        if ancestor.id != walk.target {
            return None;
        }
        Some(AncestorPath {
            generation: walk.generation(),
            side: walk.top_side()?,
            lineage_side: walk.lineage_side()?,
        })
    })
}

/// Find `target_id` as a sibling of one of the ancestors of `from_id`.
///
/// Only ancestors between `min_generation` and `max_generations` (inclusive)
/// are checked; the first match in paternal-first depth-first order wins.
#[must_use]
pub fn ancestor_sibling<'a>(
    tree: &'a FamilyTree,
    from_id: &str,
    target_id: &str,
    min_generation: usize,
    max_generations: usize,
) -> Option<AncestorSibling<'a>> {
    let from = tree.find_individual(from_id)?;
    let mut walk = UpwardWalk::new(tree, from, target_id, max_generations);

    walk.walk(from, &mut |walk, ancestor| {
        if walk.generation() < min_generation {
            return None;
        }
        let sibling = siblings_of(walk.tree, &ancestor.id)
            .into_iter()
            .find(|sibling| sibling.individual.id == walk.target)?;
        Some(AncestorSibling {
            generation: walk.generation(),
            side: walk.lineage_side()?,
            ancestor,
            sibling_type: sibling.kind,
        })
    })
}

/// All ancestors of an individual within the bound, with their generation
/// distance.
///
/// The individual itself is included at generation 0. Breadth-first, so an
/// ancestor reachable along several lines carries its smallest distance.
#[must_use]
pub fn ancestor_generations<'a>(
    tree: &'a FamilyTree,
    individual_id: &str,
    max_generations: usize,
) -> FxHashMap<&'a str, usize> {
    let mut generations = FxHashMap::default();
    let Some(individual) = tree.find_individual(individual_id) else {
        return generations;
    };

    let mut queue = VecDeque::from([(individual, 0_usize)]);
    generations.insert(individual.id.as_str(), 0);

    while let Some((current, generation)) = queue.pop_front() {
        if generation >= max_generations {
            continue;
        }
        for parent in parents_of(tree, &current.id).iter() {
            if generations.contains_key(parent.id.as_str()) {
                continue;
            }
            generations.insert(parent.id.as_str(), generation + 1);
            queue.push_back((parent, generation + 1));
        }
    }
    generations
}
