//! Individual entity model
//!
//! An Individual is one person in the family-history dataset. Apart from the
//! display name and the opaque birth and death markers, an individual only
//! carries pointers into the family records: the families it belongs to as a
//! child (FAMC) and the families it heads as a spouse (FAMS).

use crate::models::traits::EntityModel;
use crate::models::types::Gender;
use serde::{Deserialize, Serialize};

/// Birth markers that mean "no birth recorded"
const ABSENT_BIRTH_MARKERS: [&str; 3] = ["", "?", "Unknown"];

/// Death markers that mean "no death to show next to the name"
const ABSENT_DEATH_MARKERS: [&str; 4] = ["", "?", "Unknown", "Living"];

/// Core Individual entity representing a person in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Unique identifier (e.g. a GEDCOM pointer such as `@I12@`)
    pub id: String,
    /// Precomputed display name
    pub name: String,
    /// Gender code
    #[serde(default)]
    pub gender: Gender,
    /// Formatted birth marker
    #[serde(default)]
    pub birth: Option<String>,
    /// Formatted death marker (`Living` is a valid value)
    #[serde(default)]
    pub death: Option<String>,
    /// Families in which this individual is recorded as a child, in input order
    #[serde(default)]
    pub family_as_child: Vec<String>,
    /// Families in which this individual is recorded as a spouse, in input order
    #[serde(default)]
    pub family_as_spouse: Vec<String>,
}

impl Individual {
    /// Create a new Individual with minimal required information
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            birth: None,
            death: None,
            family_as_child: Vec::new(),
            family_as_spouse: Vec::new(),
        }
    }

    /// Set the birth marker
    #[must_use]
    pub fn with_birth(mut self, birth: impl Into<String>) -> Self {
        self.birth = Some(birth.into());
        self
    }

    /// Set the death marker
    #[must_use]
    pub fn with_death(mut self, death: impl Into<String>) -> Self {
        self.death = Some(death.into());
        self
    }

    /// Add a family-as-child reference
    #[must_use]
    pub fn child_of(mut self, family_id: impl Into<String>) -> Self {
        self.family_as_child.push(family_id.into());
        self
    }

    /// Add a family-as-spouse reference
    #[must_use]
    pub fn spouse_in(mut self, family_id: impl Into<String>) -> Self {
        self.family_as_spouse.push(family_id.into());
        self
    }

    /// The authoritative family-as-child reference.
    ///
    /// Only the first FAMC link is used for parentage and siblings; any further
    /// links (an adoptive family next to the biological one, say) are ignored.
    #[must_use]
    pub fn primary_family_as_child(&self) -> Option<&str> {
        self.family_as_child.first().map(String::as_str)
    }

    /// Whether this individual is a spouse in the given family
    #[must_use]
    pub fn is_spouse_in(&self, family_id: &str) -> bool {
        self.family_as_spouse.iter().any(|fam| fam == family_id)
    }

    /// Birth marker, if it carries something worth showing
    #[must_use]
    pub fn known_birth(&self) -> Option<&str> {
        self.birth
            .as_deref()
            .filter(|marker| !ABSENT_BIRTH_MARKERS.contains(&marker.trim()))
    }

    /// Death marker, if it carries an actual death
    #[must_use]
    pub fn known_death(&self) -> Option<&str> {
        self.death
            .as_deref()
            .filter(|marker| !ABSENT_DEATH_MARKERS.contains(&marker.trim()))
    }

    /// Display name qualified with birth and death markers, as offered in name pickers.
    ///
    /// `Ada (b. 1815 - d. 1852)`, `Ada (b. 1815)`, `Ada (d. 1852)` or just `Ada`.
    #[must_use]
    pub fn name_with_dates(&self) -> String {
        match (self.known_birth(), self.known_death()) {
            (Some(birth), Some(death)) => format!("{} (b. {birth} - d. {death})", self.name),
            (Some(birth), None) => format!("{} (b. {birth})", self.name),
            (None, Some(death)) => format!("{} (d. {death})", self.name),
            (None, None) => self.name.clone(),
        }
    }
}

impl EntityModel for Individual {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}
