//! Common domain type definitions
//!
//! This module contains the small enum types shared by the entity models and
//! the kinship queries: gender codes, child relation flags, sibling and spouse
//! qualifiers, and the parental side of a relative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    /// Male gender (`M`)
    Male,
    /// Female gender (`F`)
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl Gender {
    /// Pick the gendered word for this individual.
    ///
    /// Anything that is not recorded as male takes the female form, which is
    /// how relationship phrases have always treated an unknown gender code.
    #[must_use]
    pub const fn pick<'a>(self, male: &'a str, female: &'a str) -> &'a str {
        match self {
            Self::Male => male,
            Self::Female | Self::Unknown => female,
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
        .to_string()
    }
}

/// How a child is attached to a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChildRelation {
    /// Biological child (the default when no flag is recorded)
    #[default]
    Biological,
    /// Adopted child
    Adopted,
}

impl ChildRelation {
    /// Whether the child entry carries the adopted flag
    #[must_use]
    pub const fn is_adopted(self) -> bool {
        matches!(self, Self::Adopted)
    }
}

impl From<&str> for ChildRelation {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "adopted" => Self::Adopted,
            _ => Self::Biological,
        }
    }
}

impl From<String> for ChildRelation {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ChildRelation> for String {
    fn from(relation: ChildRelation) -> Self {
        match relation {
            ChildRelation::Biological => "biological",
            ChildRelation::Adopted => "adopted",
        }
        .to_string()
    }
}

/// Parental branch on which a relative lies, seen from the query subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Reached through the father
    Paternal,
    /// Reached through the mother
    Maternal,
}

impl Side {
    /// Lower-case label used in relationship phrases
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paternal => "paternal",
            Self::Maternal => "maternal",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a sibling relative to the query subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiblingType {
    /// Both parents shared
    Full,
    /// Only the father shared
    PaternalHalf,
    /// Only the mother shared
    MaternalHalf,
    /// Adopted into the subject's own family
    Adopted,
    /// Adopted into another family of the subject's father
    AdoptedPaternal,
    /// Adopted into another family of the subject's mother
    AdoptedMaternal,
}

impl SiblingType {
    /// Display qualifier, `None` for full siblings
    #[must_use]
    pub const fn qualifier(self) -> Option<&'static str> {
        match self {
            Self::Full => None,
            Self::PaternalHalf => Some("Paternal Half"),
            Self::MaternalHalf => Some("Maternal Half"),
            Self::Adopted => Some("Adopted"),
            Self::AdoptedPaternal => Some("Adopted (Paternal)"),
            Self::AdoptedMaternal => Some("Adopted (Maternal)"),
        }
    }

    /// Precedence when the same sibling is reached along several paths.
    ///
    /// Lower wins: shared biology outranks a half relation, which outranks a
    /// flagged adoption.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Full => 0,
            Self::PaternalHalf | Self::MaternalHalf => 1,
            Self::Adopted | Self::AdoptedPaternal | Self::AdoptedMaternal => 2,
        }
    }
}

impl fmt::Display for SiblingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier().unwrap_or("Full"))
    }
}

/// Status of a marriage as seen from one partner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpouseStatus {
    /// Family carries no divorce marker
    Married,
    /// Family carries a divorce marker
    Divorced,
}

impl SpouseStatus {
    /// Qualifier shown in relative listings, `None` for an intact marriage
    #[must_use]
    pub const fn qualifier(self) -> Option<&'static str> {
        match self {
            Self::Married => None,
            Self::Divorced => Some("Divorced"),
        }
    }
}
