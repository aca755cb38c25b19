//! Configuration for the kinship engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation bounds for the upward searches of the relationship pipeline.
///
/// Every walk up the parent chain stops at its bound, which is what keeps the
/// engine terminating on cyclic input. A relative beyond the bound is simply
/// not found by that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDepths {
    /// Bound for the direct parent check
    pub parent: usize,
    /// Bound for the grandparent check
    pub grandparent: usize,
    /// Bound for the great-uncle/great-aunt search
    pub great_uncle: usize,
    /// Bound for the common-ancestor (cousin) search
    pub cousin: usize,
    /// Bound for the deep ancestor search
    pub ancestor: usize,
}

impl Default for SearchDepths {
    fn default() -> Self {
        Self {
            parent: 1,
            grandparent: 2,
            great_uncle: 5,
            cousin: 8,
            ancestor: 15,
        }
    }
}

impl SearchDepths {
    /// Set the great-uncle/great-aunt search bound
    #[must_use]
    pub const fn with_great_uncle(mut self, generations: usize) -> Self {
        self.great_uncle = generations;
        self
    }

    /// Set the common-ancestor search bound
    #[must_use]
    pub const fn with_cousin(mut self, generations: usize) -> Self {
        self.cousin = generations;
        self
    }

    /// Set the deep ancestor search bound
    #[must_use]
    pub const fn with_ancestor(mut self, generations: usize) -> Self {
        self.ancestor = generations;
        self
    }
}

impl fmt::Display for SearchDepths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Depths:")?;
        writeln!(f, "  Parent: {}", self.parent)?;
        writeln!(f, "  Grandparent: {}", self.grandparent)?;
        writeln!(f, "  Great Uncle/Aunt: {}", self.great_uncle)?;
        writeln!(f, "  Cousin: {}", self.cousin)?;
        writeln!(f, "  Ancestor: {}", self.ancestor)?;
        Ok(())
    }
}
