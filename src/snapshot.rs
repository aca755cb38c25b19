//! Family-tree snapshots
//!
//! A snapshot is the structured hand-over from the ingestion side: every
//! individual and family record, already resolved to ids and display names.
//! It is read as JSON of the shape
//!
//! ```json
//! {
//!   "individuals": [{ "id": "@I1@", "name": "Ann Lee", "gender": "F",
//!                     "family_as_child": ["@F1@"], "family_as_spouse": [] }],
//!   "families": [{ "id": "@F1@", "husband": "@I2@", "wife": "@I3@",
//!                  "children": [{ "id": "@I1@", "relation": "adopted" }] }]
//! }
//! ```

use crate::error::{KinshipError, Result};
use crate::models::{Family, FamilyTree, Individual};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw individuals and families as supplied by the ingestion side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Individual records in input order
    #[serde(default)]
    pub individuals: Vec<Individual>,
    /// Family records in input order
    #[serde(default)]
    pub families: Vec<Family>,
}

impl Snapshot {
    /// Parse a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse a snapshot from a reader yielding JSON
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let snapshot: Self = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load a snapshot from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading family tree snapshot from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check the record-level rules of the data model.
    ///
    /// Ids must be present. Duplicate ids and dangling references are left to
    /// the index, which tolerates them.
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.individuals.iter().position(|ind| ind.id.trim().is_empty()) {
            return Err(KinshipError::InvalidSnapshot(format!(
                "individual at position {pos} has an empty id"
            )));
        }
        if let Some(pos) = self.families.iter().position(|fam| fam.id.trim().is_empty()) {
            return Err(KinshipError::InvalidSnapshot(format!(
                "family at position {pos} has an empty id"
            )));
        }
        Ok(())
    }

    /// Build the family tree index from this snapshot
    #[must_use]
    pub fn into_tree(self) -> FamilyTree {
        FamilyTree::new(self.individuals, self.families)
    }
}
