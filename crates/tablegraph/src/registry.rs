//! Canonical name registry.
//!
//! Maps each [`NameKey`] to the spelling shown to users. Registering a
//! spelling for a key that already exists replaces the old spelling, so the
//! last occurrence in the input wins.

use crate::domain::NameKey;
use std::collections::BTreeMap;

/// Case-insensitive key to display spelling map.
///
/// Entries are kept in key order so enumeration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: BTreeMap<NameKey, String>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `raw` as the display spelling of its key and return the key.
    pub fn register(&mut self, raw: &str) -> NameKey {
        let key = NameKey::fold(raw);
        self.names.insert(key.clone(), raw.to_string());
        key
    }

    /// Display spelling for `key`.
    ///
    /// Keys that were never registered render as their upper-cased form.
    pub fn resolve(&self, key: &NameKey) -> String {
        self.names
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.as_str().to_uppercase())
    }

    /// Returns `true` if `key` has a display spelling.
    pub fn contains(&self, key: &NameKey) -> bool {
        self.names.contains_key(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display spellings in ascending key order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_returns_folded_key() {
        let mut registry = NameRegistry::new();
        let key = registry.register("Sales.Orders");

        assert_eq!(key.as_str(), "sales.orders");
        assert_eq!(registry.resolve(&key), "Sales.Orders");
    }

    #[test]
    fn last_spelling_wins() {
        let mut registry = NameRegistry::new();
        registry.register("sales.orders");
        let key = registry.register("SALES.ORDERS");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(&key), "SALES.ORDERS");
    }

    #[test]
    fn unregistered_key_falls_back_to_upper_case() {
        let registry = NameRegistry::new();
        let key = NameKey::fold("ghost.table");

        assert!(!registry.contains(&key));
        assert_eq!(registry.resolve(&key), "GHOST.TABLE");
    }

    #[test]
    fn display_names_follow_key_order() {
        let mut registry = NameRegistry::new();
        registry.register("b.two");
        registry.register("A.one");
        registry.register("c.Three");

        let names: Vec<&str> = registry.display_names().collect();
        assert_eq!(names, vec!["A.one", "b.two", "c.Three"]);
    }

    #[test]
    fn empty_registry() {
        let registry = NameRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.display_names().count(), 0);
    }
}
