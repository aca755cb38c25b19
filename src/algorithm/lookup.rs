//! Name lookup for relationship queries
//!
//! A typed name is matched against the tree with a fixed list of strategies,
//! tried in order. Each strategy returns the first individual, in input
//! order, that it matches.

use crate::models::{FamilyTree, Individual, ModelCollection};

/// One way of matching a query string to an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Display name equals the query
    ExactName,
    /// Display name with birth/death qualifier equals the query
    NameWithDates,
    /// Individual id equals the query
    Id,
    /// Query is a case-insensitive substring of the display name, with or without dates
    Substring,
}

impl LookupStrategy {
    /// Strategies in the order they are tried
    pub const ORDER: [Self; 4] = [Self::ExactName, Self::NameWithDates, Self::Id, Self::Substring];

    /// Whether this strategy matches the individual
    #[must_use]
    pub fn matches(self, individual: &Individual, query: &str) -> bool {
        match self {
            Self::ExactName => individual.name == query,
            Self::NameWithDates => individual.name_with_dates() == query,
            Self::Id => individual.id == query,
            Self::Substring => {
                let needle = query.to_lowercase();
                individual.name_with_dates().to_lowercase().contains(&needle)
                    || individual.name.to_lowercase().contains(&needle)
            }
        }
    }

    /// First individual this strategy matches
    #[must_use]
    pub fn find<'a>(self, tree: &'a FamilyTree, query: &str) -> Option<&'a Individual> {
        if self == Self::Id {
            return tree.find_individual(query);
        }
        tree.individuals()
            .find(|individual| self.matches(individual, query))
    }
}

/// Resolve a typed name (or id) to an individual, trying every strategy in order
#[must_use]
pub fn find_by_name<'a>(tree: &'a FamilyTree, query: &str) -> Option<&'a Individual> {
    if query.is_empty() {
        return None;
    }
    LookupStrategy::ORDER
        .iter()
        .find_map(|strategy| strategy.find(tree, query))
}
