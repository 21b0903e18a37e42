//! Immutable attribute containers.
//!
//! Attributes tag variants with the usage they represent (`usage=runtime`,
//! `category=documentation`, ...). Containers are never mutated in place:
//! [`ImmutableAttributes::overlay`] produces a new container, which is how
//! call-specific overrides are applied at artifact-selection time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An ordered, immutable set of string attributes.
///
/// Cloning is cheap; the underlying map is shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ImmutableAttributes {
    entries: Arc<BTreeMap<String, String>>,
}

impl ImmutableAttributes {
    /// The empty attribute container.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a container from key/value pairs. Later duplicates win.
    pub fn of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Whether the container holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return a new container where every key of `overrides` replaces the
    /// corresponding value in `self`.
    pub fn overlay(&self, overrides: &ImmutableAttributes) -> Self {
        if overrides.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return overrides.clone();
        }
        let mut merged = (*self.entries).clone();
        for (key, value) in overrides.entries.iter() {
            merged.insert(key.clone(), value.clone());
        }
        Self {
            entries: Arc::new(merged),
        }
    }

    /// Whether no key of `requested` is present here with a different value.
    ///
    /// Keys missing from `self` are compatible with anything.
    pub fn is_compatible_with(&self, requested: &ImmutableAttributes) -> bool {
        requested.iter().all(|(key, value)| self.get(key).is_none_or(|own| own == value))
    }

    /// Count of keys in `requested` that are present here with an equal value.
    pub fn matching_keys(&self, requested: &ImmutableAttributes) -> usize {
        requested.iter().filter(|(key, value)| self.get(key) == Some(*value)).count()
    }
}

impl From<BTreeMap<String, String>> for ImmutableAttributes {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl From<ImmutableAttributes> for BTreeMap<String, String> {
    fn from(attributes: ImmutableAttributes) -> Self {
        Arc::unwrap_or_clone(attributes.entries)
    }
}

impl fmt::Display for ImmutableAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}
