//! Relationship classification
//!
//! `classify` runs an ordered list of rules over a pair of individuals and
//! returns the first, most specific, relationship that matches. Rules never
//! fail: a rule either produces a relationship or passes, and a search that
//! runs into its generation bound simply passes to the next rule.

use super::ancestors::{ancestor_path, ancestor_sibling};
use super::common_ancestor::nearest_common_ancestor;
use super::lineage::{Lineage, get_relatives};
use super::parentage::{children_of, parents_of, primary_family, spouses_of};
use super::siblings::siblings_of;
use super::find_relative;
use crate::config::SearchDepths;
use crate::models::{FamilyTree, Individual, Side, SiblingType, SpouseStatus};
use crate::phrase;
use log::debug;

/// Which of the two classified individuals holds the named role.
///
/// In "A is B's grandmother" the role holder is A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The first individual of the pair
    First,
    /// The second individual of the pair
    Second,
}

/// Relationship through a spouse or a child's spouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InLawKind {
    /// Parent of a spouse
    ParentInLaw,
    /// Sibling of a spouse
    SiblingInLaw,
    /// Child of a spouse
    StepChild,
    /// Spouse of a child
    ChildInLaw,
}

/// Cousin degree and removal derived from two generation distances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CousinDegree {
    /// Cousin ordinal (1 for "1st cousins")
    pub degree: usize,
    /// Generation difference ("once removed" is 1)
    pub removed: usize,
}

impl CousinDegree {
    /// Derive the cousin degree from the distances of both individuals to
    /// their common ancestor.
    ///
    /// The degree is the smaller distance and the removal the difference. A
    /// distance of 0 means one individual is the ancestor itself, which is not
    /// a cousin relation.
    #[must_use]
    pub fn from_generations(gen1: usize, gen2: usize) -> Option<Self> {
        let degree = gen1.min(gen2);
        (degree > 0).then(|| Self {
            degree,
            removed: gen1.abs_diff(gen2),
        })
    }
}

/// The classified relationship between two individuals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship<'a> {
    /// Both inputs are the same individual
    SamePerson,
    /// The two share a family as spouses
    Married,
    /// Father or mother of the other
    Parent {
        /// The parent
        relative: Role,
        /// Whether the child is attached to the parent's family as adopted
        adopted: bool,
    },
    /// Grandfather or grandmother of the other
    Grandparent {
        /// The grandparent
        relative: Role,
        /// Parent of the grandchild through which the line runs
        side: Side,
    },
    /// Sibling of one of the other's parents
    UncleAunt {
        /// The uncle or aunt
        relative: Role,
        /// Parent of the niece or nephew whose sibling the uncle or aunt is
        side: Side,
        /// How the uncle or aunt is a sibling of that parent
        sibling_type: SiblingType,
    },
    /// Sibling of one of the other's grandparents or earlier ancestors
    GreatUncleAunt {
        /// The great uncle or aunt
        relative: Role,
        /// First step up from the niece or nephew
        side: Side,
        /// Generation of the ancestor whose sibling this is (2 for grandparents)
        generation: usize,
    },
    /// Related through a spouse or a child's spouse
    InLaw {
        /// Who holds the in-law role
        relative: Role,
        /// Kind of in-law relation
        kind: InLawKind,
    },
    /// Siblings of the given type
    Sibling {
        /// Classification of the sibling relation
        sibling_type: SiblingType,
    },
    /// Spouses found through one partner's families
    Spouse {
        /// Whether the marriage ended in divorce
        status: SpouseStatus,
    },
    /// Ancestor found by the deep search
    Ancestor {
        /// The ancestor
        relative: Role,
        /// Branch next to the ancestor at the top of the path
        side: Side,
        /// Number of parent links between the two
        generation: usize,
    },
    /// Collateral relatives through a common ancestor
    Cousin(CousinDegree),
    /// Share a parent, sibling or child not covered by any other rule
    SharedRelative {
        /// The relative both have in common
        through: &'a Individual,
    },
    /// Nothing connects the two within the search bounds
    Unrelated,
}

/// A relationship together with the individuals it relates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    /// First individual of the query
    pub first: &'a Individual,
    /// Second individual of the query
    pub second: &'a Individual,
    /// The relationship found
    pub relationship: Relationship<'a>,
}

impl<'a> Classification<'a> {
    /// The role holder and the other individual, in that order
    #[must_use]
    pub const fn oriented(&self, role: Role) -> (&'a Individual, &'a Individual) {
        match role {
            Role::First => (self.first, self.second),
            Role::Second => (self.second, self.first),
        }
    }

    /// Render the classification as an English sentence
    #[must_use]
    pub fn describe(&self) -> String {
        phrase::format(self)
    }
}

type Rule<'a> = fn(&Pipeline<'a>) -> Option<Relationship<'a>>;

/// One classification run over a pair of individuals
struct Pipeline<'a> {
    tree: &'a FamilyTree,
    depths: SearchDepths,
    first: &'a Individual,
    second: &'a Individual,
}

impl<'a> Pipeline<'a> {
    fn run(&self) -> Relationship<'a> {
        let rules: [(&str, Rule<'a>); 11] = [
            ("identity", Self::identity),
            ("marriage", Self::marriage),
            ("parent", Self::parent),
            ("grandparent", Self::grandparent),
            ("uncle/aunt", Self::uncle_aunt),
            ("great uncle/aunt", Self::great_uncle_aunt),
            ("in-law", Self::in_law),
            ("sibling", Self::sibling),
            ("spouse", Self::spouse),
            ("child", Self::child),
            ("ancestor", Self::ancestor),
        ];
        for (name, rule) in rules {
            if let Some(relationship) = rule(self) {
                self.log_match(name);
                return relationship;
            }
        }

        let first_lineage = get_relatives(self.tree, &self.first.id);
        let second_lineage = get_relatives(self.tree, &self.second.id);
        if let Some(relationship) = self.cousin(&first_lineage, &second_lineage) {
            self.log_match("cousin");
            return relationship;
        }
        if let Some(through) = first_lineage.shared_close_relative(&second_lineage) {
            self.log_match("shared relative");
            return Relationship::SharedRelative { through };
        }

        self.log_match("unrelated");
        Relationship::Unrelated
    }

    fn log_match(&self, rule: &str) {
        debug!(
            "Classified {} and {} by the {rule} rule",
            self.first.id, self.second.id
        );
    }

    /// Run a directed check both ways.
    ///
    /// `check(subject, target)` succeeds when `target` holds the role for
    /// `subject`; the first individual is tried as the subject first.
    fn either_way<T>(
        &self,
        check: impl Fn(&'a Individual, &'a Individual) -> Option<T>,
    ) -> Option<(Role, T)> {
        check(self.first, self.second)
            .map(|found| (Role::Second, found))
            .or_else(|| check(self.second, self.first).map(|found| (Role::First, found)))
    }

    fn identity(&self) -> Option<Relationship<'a>> {
        (self.first.id == self.second.id).then_some(Relationship::SamePerson)
    }

    fn marriage(&self) -> Option<Relationship<'a>> {
        self.first
            .family_as_spouse
            .iter()
            .any(|family_id| self.second.is_spouse_in(family_id))
            .then_some(Relationship::Married)
    }

    fn parent(&self) -> Option<Relationship<'a>> {
        self.either_way(|subject, target| {
            ancestor_path(self.tree, &subject.id, &target.id, self.depths.parent)
                .filter(|path| path.generation == 1)
                .map(|_| self.adopted_into_primary_family(subject))
        })
        .map(|(relative, adopted)| Relationship::Parent { relative, adopted })
    }

    /// Whether the child's entry in its own child family is flagged adopted
    fn adopted_into_primary_family(&self, child: &Individual) -> bool {
        primary_family(self.tree, child)
            .and_then(|family| family.children.iter().find(|entry| entry.id == child.id))
            .is_some_and(|entry| entry.relation.is_adopted())
    }

    fn grandparent(&self) -> Option<Relationship<'a>> {
        self.either_way(|subject, target| {
            ancestor_path(self.tree, &subject.id, &target.id, self.depths.grandparent)
                .filter(|path| path.generation == 2)
        })
        .map(|(relative, path)| Relationship::Grandparent {
            relative,
            side: path.lineage_side,
        })
    }

    fn uncle_aunt(&self) -> Option<Relationship<'a>> {
        self.either_way(|subject, target| {
            parents_of(self.tree, &subject.id)
                .by_side()
                .find_map(|(side, parent)| {
                    let siblings = siblings_of(self.tree, &parent.id);
                    find_relative(&siblings, &target.id).map(|sibling| (side, sibling.kind))
                })
        })
        .map(|(relative, (side, sibling_type))| Relationship::UncleAunt {
            relative,
            side,
            sibling_type,
        })
    }

    fn great_uncle_aunt(&self) -> Option<Relationship<'a>> {
        self.either_way(|subject, target| {
            ancestor_sibling(self.tree, &subject.id, &target.id, 2, self.depths.great_uncle)
        })
        .map(|(relative, found)| Relationship::GreatUncleAunt {
            relative,
            side: found.side,
            generation: found.generation,
        })
    }

    fn in_law(&self) -> Option<Relationship<'a>> {
        let through_spouse = self.either_way(|subject, target| {
            spouses_of(self.tree, &subject.id)
                .iter()
                .filter(|spouse| spouse.id() != target.id)
                .find_map(|spouse| {
                    if parents_of(self.tree, spouse.id()).contains(&target.id) {
                        Some(InLawKind::ParentInLaw)
                    } else if find_relative(&siblings_of(self.tree, spouse.id()), &target.id)
                        .is_some()
                    {
                        Some(InLawKind::SiblingInLaw)
                    } else if find_relative(&children_of(self.tree, spouse.id()), &target.id)
                        .is_some()
                        && find_relative(&children_of(self.tree, &subject.id), &target.id).is_none()
                    {
                        Some(InLawKind::StepChild)
                    } else {
                        None
                    }
                })
        });
        let found = through_spouse.or_else(|| {
            self.either_way(|subject, target| {
                children_of(self.tree, &subject.id)
                    .iter()
                    .any(|child| {
                        find_relative(&spouses_of(self.tree, child.id()), &target.id).is_some()
                    })
                    .then_some(InLawKind::ChildInLaw)
            })
        });
        found.map(|(relative, kind)| Relationship::InLaw { relative, kind })
    }

    fn sibling(&self) -> Option<Relationship<'a>> {
        // A child adopted out of its first child family only shows up in
        // its adoptive siblings' lists
        self.either_way(|subject, target| {
            find_relative(&siblings_of(self.tree, &subject.id), &target.id)
                .map(|sibling| sibling.kind)
        })
        .map(|(_, sibling_type)| Relationship::Sibling { sibling_type })
    }

    fn spouse(&self) -> Option<Relationship<'a>> {
        self.either_way(|subject, target| {
            find_relative(&spouses_of(self.tree, &subject.id), &target.id).map(|spouse| spouse.kind)
        })
        .map(|(_, status)| Relationship::Spouse { status })
    }

    fn child(&self) -> Option<Relationship<'a>> {
        // Here the subject is the role holder: the target is its child.
        self.either_way(|subject, target| {
            find_relative(&children_of(self.tree, &subject.id), &target.id).map(|child| child.kind)
        })
        .map(|(child_role, relation)| Relationship::Parent {
            relative: match child_role {
                Role::First => Role::Second,
                Role::Second => Role::First,
            },
            adopted: relation.is_adopted(),
        })
    }

    fn ancestor(&self) -> Option<Relationship<'a>> {
        self.either_way(|subject, target| {
            ancestor_path(self.tree, &subject.id, &target.id, self.depths.ancestor)
        })
        .map(|(relative, path)| Relationship::Ancestor {
            relative,
            side: path.side,
            generation: path.generation,
        })
    }

    fn cousin(&self, first: &Lineage<'a>, second: &Lineage<'a>) -> Option<Relationship<'a>> {
        if first.shared_grandparent(second).is_some() {
            return Some(Relationship::Cousin(CousinDegree {
                degree: 1,
                removed: 0,
            }));
        }
        let common = nearest_common_ancestor(
            self.tree,
            &self.first.id,
            &self.second.id,
            self.depths.cousin,
        )?;
        debug!(
            "Nearest common ancestor of {} and {} is {} ({}, {})",
            self.first.id, self.second.id, common.ancestor.id, common.gen1, common.gen2
        );
        CousinDegree::from_generations(common.gen1, common.gen2).map(Relationship::Cousin)
    }
}

/// Classify the relationship between two indexed individuals.
///
/// Returns `None` only when one of the ids is not indexed. Identical ids
/// classify as [`Relationship::SamePerson`].
#[must_use]
pub fn classify<'a>(
    tree: &'a FamilyTree,
    depths: &SearchDepths,
    id1: &str,
    id2: &str,
) -> Option<Classification<'a>> {
    let first = tree.find_individual(id1)?;
    let second = tree.find_individual(id2)?;
    let pipeline = Pipeline {
        tree,
        depths: *depths,
        first,
        second,
    };

    Some(Classification {
        first,
        second,
        relationship: pipeline.run(),
    })
}
