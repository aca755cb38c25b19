//! Collection trait definitions for domain models
//!
//! This module defines the read-only trait implemented by the indexed entity
//! collections backing the family tree.

use crate::models::traits::EntityModel;

/// A trait for collections of models that can be queried.
///
/// `ModelCollection` provides keyed lookup along with input-ordered access,
/// so every query that scans a collection sees the records in the order the
/// ingestion side supplied them.
pub trait ModelCollection<T: EntityModel> {
    /// Get a model by its identifier
    fn get(&self, id: &str) -> Option<&T>;

    /// Get all models in the collection, in input order
    fn all(&self) -> &[T];

    /// Filter models by a predicate function, keeping input order
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.all().iter().filter(|model| predicate(model)).collect()
    }

    /// Find the first model, in input order, matching a predicate
    fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.all().iter().find(|model| predicate(model))
    }

    /// Count the total number of models in the collection
    fn count(&self) -> usize {
        self.all().len()
    }

    /// Check whether a model with the identifier exists
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
