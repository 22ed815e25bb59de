//! Ordered key/value pairs for map values.
//!
//! [`ValueMap`] is a plain sequence of `(key, value)` pairs. It never
//! reorders and never deduplicates: the serializer writes pairs exactly in
//! the order they were pushed, which keeps output deterministic no matter
//! where the data came from. Keys are usually strings but may be any
//! [`Value`](crate::Value).
//!
//! ## Examples
//!
//! ```rust
//! use hcl_tokens::{Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.push("name", "FOO");
//! map.push("value", "bar");
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("FOO"));
//!
//! let keys: Vec<_> = map.keys().filter_map(Value::as_str).collect();
//! assert_eq!(keys, vec!["name", "value"]);
//! ```

use crate::Value;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(Vec<(Value, Value)>);

impl ValueMap {
    #[must_use]
    pub fn new() -> Self {
        ValueMap(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(Vec::with_capacity(capacity))
    }

    /// Appends a pair. An existing pair with an equal key is left in place.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the value of the first pair whose key is the string `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl From<IndexMap<String, Value>> for ValueMap {
    fn from(map: IndexMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Vec<(Value, Value)>> for ValueMap {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        ValueMap(pairs)
    }
}

impl IntoIterator for ValueMap {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<Value>> FromIterator<(K, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        ValueMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
