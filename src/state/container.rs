//! The key-value mapping owned by the store.

use crate::types::StateDigest;
use std::collections::{BTreeMap, HashMap};

/// Mapping from key to value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreState {
    data: HashMap<String, String>,
}

impl StoreState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty state with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Set a key, returning the previous value if any.
    pub fn set(&mut self, key: String, value: String) -> Option<String> {
        self.data.insert(key, value)
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Drop every entry. Allocated capacity is kept for the replay that follows.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy of the contents in key order.
    pub fn to_sorted(&self) -> BTreeMap<String, String> {
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Content fingerprint, independent of insertion order.
    pub fn digest(&self) -> StateDigest {
        let mut pairs: Vec<(&str, &str)> = self
            .data
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        StateDigest::from_sorted_pairs(pairs)
    }
}
