/*!
This module provides a `Map`, a key-value dictionary that identifies keys by a string hash code.

Two keys are considered the same key if their hash codes are equal. The hash code is produced by a
[`HashFunction`], which defaults to [`ToStringHashFunction`] i.e. the [`Display`](fmt::Display)
representation of the key.
*/

use std::collections::HashMap;
use std::fmt;

/// Trait for producing the hash code that identifies a key in a [`Map`].
pub trait HashFunction<K: ?Sized> {
    /**
    Return the hash code for `key`.

    Invariants:

    1. The same key always produces the same hash code
    1. Keys that should be treated as the same key must produce the same hash code
    */
    fn hash_code(&self, key: &K) -> String;
}

/// Produces hash codes from the string representation of the key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToStringHashFunction;

impl<K> HashFunction<K> for ToStringHashFunction
where
    K: fmt::Display + ?Sized,
{
    fn hash_code(&self, key: &K) -> String {
        key.to_string()
    }
}

/**
A key-value dictionary keyed by hash codes.

# Example

```
use flowpath::Map;

let mut map = Map::new();
map.put(5, "five");

assert_eq!(map.get(&5), Some(&"five"));
assert!(map.contains(&5));
assert_eq!(map.size(), 1);
```
*/
#[derive(Clone, Debug)]
pub struct Map<K, V, H = ToStringHashFunction> {
    /// Entries indexed by the hash code of their key.
    entries: HashMap<String, (K, V)>,

    /// The function producing the hash codes of keys.
    hash_function: H,
}

impl<K, V> Map<K, V, ToStringHashFunction> {
    /// Create a new, empty [`Map`] that identifies keys by their string representation.
    pub fn new() -> Self {
        Self::with_hash_function(ToStringHashFunction)
    }
}

impl<K, V> Default for Map<K, V, ToStringHashFunction> {
    fn default() -> Self {
        Self::new()
    }
}

/// Public methods
impl<K, V, H> Map<K, V, H> {
    /// Create a new, empty [`Map`] that identifies keys with `hash_function`.
    pub fn with_hash_function(hash_function: H) -> Self {
        Self {
            entries: HashMap::new(),
            hash_function,
        }
    }

    /// Get the number of entries in the map.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty, otherwise false.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return an iterator over the keys and values of the map in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.values().map(|(key, value)| (key, value))
    }
}

impl<K, V, H> Map<K, V, H>
where
    H: HashFunction<K>,
{
    /**
    Map `value` against `key`.

    Returns the value previously mapped against the key, if any. The stored key is replaced by
    `key`.
    */
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash_code = self.hash_function.hash_code(&key);
        self.entries
            .insert(hash_code, (key, value))
            .map(|(_, previous_value)| previous_value)
    }

    /// Get the value mapped against `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .get(&self.hash_function.hash_code(key))
            .map(|(_, value)| value)
    }

    /// Remove and return the value mapped against `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries
            .remove(&self.hash_function.hash_code(key))
            .map(|(_, value)| value)
    }

    /// Returns true if a value is mapped against `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.entries
            .contains_key(&self.hash_function.hash_code(key))
    }
}
