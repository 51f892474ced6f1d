// Kinboard - search/filter and export core for the association dashboard
// Copyright (c) 2026 Kinboard Contributors
// Licensed under the MIT License

//! Filter predicate registry
//!
//! Maps a filter key to its predicate. Keys are unique within a registry;
//! registering the same key twice is a validation error rather than a silent
//! replacement, because two views sharing a registry must not fight over a
//! key's meaning.

use super::predicates::Predicate;
use crate::domain::{KinboardError, Result};
use std::collections::HashMap;

/// Key -> predicate mapping for one record shape.
pub struct FilterRegistry<T> {
    predicates: HashMap<String, Predicate<T>>,
}

impl<T> FilterRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// Register a predicate under a key.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the key is already registered.
    pub fn register(&mut self, key: impl Into<String>, predicate: Predicate<T>) -> Result<()> {
        let key = key.into();
        if self.predicates.contains_key(&key) {
            return Err(KinboardError::Validation(format!(
                "Filter key already registered: {key}"
            )));
        }
        self.predicates.insert(key, predicate);
        Ok(())
    }

    /// Chainable registration for building a registry in one expression.
    pub fn with(mut self, key: impl Into<String>, predicate: Predicate<T>) -> Result<Self> {
        self.register(key, predicate)?;
        Ok(self)
    }

    /// Look up the predicate for a key.
    pub fn get(&self, key: &str) -> Option<&Predicate<T>> {
        self.predicates.get(key)
    }

    /// Whether a key is registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.predicates.contains_key(key)
    }

    /// The number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<T> Default for FilterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::predicates;
    use serde_json::Value;

    #[test]
    fn test_register_and_get() {
        let mut registry: FilterRegistry<Value> = FilterRegistry::new();
        registry
            .register("status", predicates::exact_match("status"))
            .unwrap();

        assert!(registry.contains_key("status"));
        assert!(registry.get("status").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut registry: FilterRegistry<Value> = FilterRegistry::new();
        registry
            .register("status", predicates::exact_match("status"))
            .unwrap();

        let err = registry
            .register("status", predicates::contains("status"))
            .unwrap_err();
        assert!(matches!(err, KinboardError::Validation(_)));
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_chainable_construction() {
        let registry: FilterRegistry<Value> = FilterRegistry::new()
            .with("status", predicates::exact_match("status"))
            .unwrap()
            .with("name", predicates::contains("name"))
            .unwrap();

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let registry: FilterRegistry<Value> = FilterRegistry::default();
        assert!(registry.is_empty());
    }
}
