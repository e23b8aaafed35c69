//! Model collections
//!
//! This module provides the collection interface and the roster collection
//! holding the persons fetched from the backend.

pub mod person;

pub use person::{PersonCollection, SortDirection, SortKey};

use crate::models::EntityModel;

/// Standard interface for collections of identified models
pub trait ModelCollection<T: EntityModel> {
    /// Add a model, replacing any model with the same id
    fn add(&mut self, model: T);

    /// Get a model by id
    fn get(&self, id: T::Id) -> Option<&T>;

    /// All models, in insertion order
    fn all(&self) -> &[T];

    /// Models matching `predicate`, in insertion order
    fn filter<F>(&self, predicate: F) -> Vec<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.all().iter().filter(|model| predicate(*model)).collect()
    }

    /// Number of models
    fn count(&self) -> usize {
        self.all().len()
    }

    /// Whether a model with `id` is present
    fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }
}
