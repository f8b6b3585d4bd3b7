//! An insertion-ordered, enumerable hash with query-string and JSON helpers.

mod tests;

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::enumerable::Enumerable;
use crate::error::ToolbeltError;
use crate::value::{inspect_str, Value};

/// A single key-value association as exposed during iteration.
///
/// Named access through the fields; positional access (key first, value
/// second) through [`Pair::into_tuple`] or the tuple conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: String,
    pub value: Value,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn into_tuple(self) -> (String, Value) {
        (self.key, self.value)
    }
}

impl From<Pair> for (String, Value) {
    fn from(pair: Pair) -> Self {
        pair.into_tuple()
    }
}

/// An associative container with insertion-ordered iteration.
///
/// Keys are strings, values are loose [`Value`]s. Every `Hash` owns its
/// backing storage exclusively: construction from a borrowed mapping takes
/// a defensive copy, construction from an owned one just moves it, and
/// [`Hash::merge`] / [`Clone`] produce independent copies.
///
/// Unlike the JavaScript object it models, there is no shared prototype to
/// leak entries from: a key like `"toString"` behaves like any other key,
/// and a hash that never had a key set reports it absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hash {
    entries: IndexMap<String, Value>,
}

impl Hash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value at `key`, or `None` if the key was never set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Stores `value` at `key`, overwriting any previous entry, and
    /// returns the stored value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Value {
        let value = value.into();
        self.entries.insert(key.into(), value.clone());
        value
    }

    /// Removes `key` and returns what was removed. Order of the remaining
    /// entries is preserved.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// A fresh copy of the current state as a plain mapping.
    pub fn to_object(&self) -> IndexMap<String, Value> {
        self.entries.clone()
    }

    /// Alias of [`Hash::to_object`], consumed by the template engine.
    pub fn to_template_replacements(&self) -> IndexMap<String, Value> {
        self.to_object()
    }

    pub fn keys(&self) -> Vec<String> {
        self.map(|pair| pair.key.clone())
    }

    /// Values in iteration order, parallel to [`Hash::keys`].
    pub fn values(&self) -> Vec<Value> {
        self.map(|pair| pair.value.clone())
    }

    /// The first key whose value equals `value` in iteration order, with
    /// strict equality (no string/number coercion).
    pub fn index_of(&self, value: &Value) -> Option<String> {
        self.detect(|pair| pair.value == *value).map(|pair| pair.key)
    }

    /// Non-destructive merge: clones `self`, folds `other`'s entries in,
    /// and returns the result. `self` is untouched; `other`'s values win
    /// on key collision.
    pub fn merge(&self, other: &Hash) -> Hash {
        let mut merged = self.clone();
        merged.update(other);
        merged
    }

    /// Folds `other`'s entries into `self` via [`Hash::set`], in `other`'s
    /// iteration order. Last write wins. Returns `self` for chaining.
    pub fn update(&mut self, other: &Hash) -> &mut Self {
        other.inject(self, |map, pair| {
            map.set(pair.key.clone(), pair.value.clone());
            map
        })
    }

    /// URL-encoded query string in iteration order.
    ///
    /// Array values repeat the key once per element; an `Undefined` value
    /// (or array element) emits the bare key with no `=`; `Null` encodes
    /// as an empty value. Hash-valued entries contribute nothing.
    pub fn to_query_string(&self) -> String {
        let fragments = self.inject(Vec::new(), |mut out: Vec<String>, pair| {
            let key = urlencoding::encode(&pair.key).into_owned();
            match &pair.value {
                Value::Array(items) => {
                    for item in items {
                        out.push(to_query_pair(&key, item));
                    }
                }
                Value::Hash(_) => {}
                value => out.push(to_query_pair(&key, value)),
            }
            out
        });
        fragments.join("&")
    }

    /// Debug rendering: `#<Hash:{'key': value, ...}>` with each key and
    /// value through [`Value::inspect`].
    pub fn inspect(&self) -> String {
        let parts = self.map(|pair| format!("{}: {}", inspect_str(&pair.key), pair.value.inspect()));
        format!("#<Hash:{{{}}}>", parts.join(", "))
    }

    /// JSON rendering of the plain-mapping view. Entries with an
    /// `Undefined` value are omitted.
    pub fn to_json(&self) -> Result<String, ToolbeltError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Borrowing iterator over `(key, value)` in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

fn to_query_pair(encoded_key: &str, value: &Value) -> String {
    if value.is_undefined() {
        return encoded_key.to_string();
    }
    format!("{}={}", encoded_key, urlencoding::encode(&value.interpret()))
}

impl Enumerable for Hash {
    type Item = Pair;

    fn each<F>(&self, mut f: F)
    where
        F: FnMut(&Pair),
    {
        for (key, value) in &self.entries {
            let pair = Pair {
                key: key.clone(),
                value: value.clone(),
            };
            f(&pair);
        }
    }
}

/// Owned mappings are adopted directly; the caller gives up its handle, so
/// no defensive copy is needed.
impl From<IndexMap<String, Value>> for Hash {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

/// Borrowed mappings are copied defensively.
impl From<&IndexMap<String, Value>> for Hash {
    fn from(entries: &IndexMap<String, Value>) -> Self {
        Self {
            entries: entries.clone(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Hash {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TryFrom<Value> for Hash {
    type Error = ToolbeltError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Hash(hash) => Ok(hash),
            other => Err(ToolbeltError::not_a_hash(other.type_name())),
        }
    }
}

impl TryFrom<&Value> for Hash {
    type Error = ToolbeltError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Hash(hash) => Ok(hash.clone()),
            other => Err(ToolbeltError::not_a_hash(other.type_name())),
        }
    }
}

impl<'a> IntoIterator for &'a Hash {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let live: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, v)| !v.is_undefined())
            .collect();
        let mut map = serializer.serialize_map(Some(live.len()))?;
        for (key, value) in live {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
