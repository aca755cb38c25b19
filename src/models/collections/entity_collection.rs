//! Indexed entity collection
//!
//! This module provides the collection type used for both individuals and
//! families: records kept in input order with an id index on top.

use crate::models::collections::collection_traits::ModelCollection;
use crate::models::traits::EntityModel;
use log::warn;
use rustc_hash::FxHashMap;

/// A collection of entities that can be efficiently queried by id
#[derive(Debug, Clone)]
pub struct EntityCollection<T> {
    /// Entities in input order
    entities: Vec<T>,
    /// Position of each entity in `entities`, keyed by id
    index: FxHashMap<String, usize>,
    /// Number of records dropped because their id was already present
    duplicates: usize,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            index: FxHashMap::default(),
            duplicates: 0,
        }
    }
}

impl<T: EntityModel<Id = String>> EntityCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from records in input order.
    ///
    /// Ids must be unique. When a later record repeats an id, the first one
    /// stays authoritative and the repeat is dropped with a warning.
    #[must_use]
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::new();
        for entity in entities {
            collection.insert(entity);
        }
        collection
    }

    fn insert(&mut self, entity: T) {
        if self.index.contains_key(entity.id()) {
            warn!("Duplicate id {} ignored, keeping first record", entity.key());
            self.duplicates += 1;
            return;
        }
        self.index.insert(entity.key(), self.entities.len());
        self.entities.push(entity);
    }

    /// Number of records dropped as duplicates while building
    #[must_use]
    pub const fn duplicate_count(&self) -> usize {
        self.duplicates
    }
}

impl<T: EntityModel<Id = String>> ModelCollection<T> for EntityCollection<T> {
    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|&pos| self.entities.get(pos))
    }

    fn all(&self) -> &[T] {
        &self.entities
    }
}
