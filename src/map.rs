//! Ordered map type for TSON objects.
//!
//! This module provides [`TsonMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object fields. Key order is irrelevant for
//! correctness of the tagging transform, but preserving it keeps serialized
//! output deterministic and diffs readable.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::{TsonMap, TsonValue};
//!
//! let mut map = TsonMap::new();
//! map.insert("name".to_string(), TsonValue::from("Alice"));
//! map.insert("age".to_string(), TsonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to TSON values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which keeps `to_string` output deterministic.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{TsonMap, TsonValue};
///
/// let mut map = TsonMap::new();
/// map.insert("first".to_string(), TsonValue::from(1));
/// map.insert("second".to_string(), TsonValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TsonMap(IndexMap<String, crate::TsonValue>);

impl TsonMap {
    /// Creates an empty `TsonMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::TsonMap;
    ///
    /// let map = TsonMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        TsonMap(IndexMap::new())
    }

    /// Creates an empty `TsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::{TsonMap, TsonValue};
    ///
    /// let mut map = TsonMap::new();
    /// assert!(map.insert("key".to_string(), TsonValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), TsonValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::TsonValue) -> Option<crate::TsonValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::TsonValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::TsonValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::TsonValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::TsonValue> {
        self.0.iter()
    }
}

impl Default for TsonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::TsonValue>> for TsonMap {
    fn from(map: HashMap<String, crate::TsonValue>) -> Self {
        TsonMap(map.into_iter().collect())
    }
}

impl From<TsonMap> for HashMap<String, crate::TsonValue> {
    fn from(map: TsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for TsonMap {
    type Item = (String, crate::TsonValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::TsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TsonMap {
    type Item = (&'a String, &'a crate::TsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::TsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::TsonValue)> for TsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::TsonValue)>>(iter: T) -> Self {
        TsonMap(IndexMap::from_iter(iter))
    }
}
