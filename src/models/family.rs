//! Family unit representation
//!
//! A Family is one couple record: an optional husband, an optional wife and
//! the ordered list of children attached to the couple. References are plain
//! individual ids; a reference that does not resolve is an unknown parent or
//! child, never an error.

use crate::models::traits::EntityModel;
use crate::models::types::{ChildRelation, SpouseStatus};
use serde::{Deserialize, Serialize};

/// A child attached to a family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildEntry {
    /// Individual id of the child
    pub id: String,
    /// Relation flag; absent means biological
    #[serde(default)]
    pub relation: ChildRelation,
}

impl ChildEntry {
    /// Create a biological child entry
    #[must_use]
    pub fn biological(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            relation: ChildRelation::Biological,
        }
    }

    /// Create an adopted child entry
    #[must_use]
    pub fn adopted(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            relation: ChildRelation::Adopted,
        }
    }
}

/// Representation of a family unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique family identifier
    pub id: String,
    /// Husband individual id, if recorded
    #[serde(default)]
    pub husband: Option<String>,
    /// Wife individual id, if recorded
    #[serde(default)]
    pub wife: Option<String>,
    /// Children in input order
    #[serde(default)]
    pub children: Vec<ChildEntry>,
    /// Whether the couple is recorded as divorced
    #[serde(default)]
    pub divorced: bool,
}

impl Family {
    /// Create a new family with no members
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            husband: None,
            wife: None,
            children: Vec::new(),
            divorced: false,
        }
    }

    /// Set the husband for this family
    #[must_use]
    pub fn with_husband(mut self, husband: impl Into<String>) -> Self {
        self.husband = Some(husband.into());
        self
    }

    /// Set the wife for this family
    #[must_use]
    pub fn with_wife(mut self, wife: impl Into<String>) -> Self {
        self.wife = Some(wife.into());
        self
    }

    /// Add a biological child
    #[must_use]
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(ChildEntry::biological(child));
        self
    }

    /// Add an adopted child
    #[must_use]
    pub fn with_adopted_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(ChildEntry::adopted(child));
        self
    }

    /// Mark the family as divorced
    #[must_use]
    pub fn with_divorce(mut self) -> Self {
        self.divorced = true;
        self
    }

    /// The other partner of this family, seen from `individual_id`.
    ///
    /// Returns `None` when the individual is not one of the partners or the
    /// other partner is not recorded.
    #[must_use]
    pub fn partner_of(&self, individual_id: &str) -> Option<&str> {
        if self.husband.as_deref() == Some(individual_id) {
            self.wife.as_deref()
        } else if self.wife.as_deref() == Some(individual_id) {
            self.husband.as_deref()
        } else {
            None
        }
    }

    /// Marriage status carried by this family
    #[must_use]
    pub const fn status(&self) -> SpouseStatus {
        if self.divorced {
            SpouseStatus::Divorced
        } else {
            SpouseStatus::Married
        }
    }

    /// Ids of every individual this family references
    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.husband
            .as_deref()
            .into_iter()
            .chain(self.wife.as_deref())
            .chain(self.children.iter().map(|child| child.id.as_str()))
    }
}

impl EntityModel for Family {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
