use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Fields;
use crate::selector::{selector_from_set, Selector};

/// A concrete set of fields, e.g. the labels of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set {
    inner: BTreeMap<String, String>,
}

impl Set {
    pub fn new() -> Self {
        Set {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.inner.iter()
    }

    /// Exact-match selector over every field in the set.
    pub fn as_selector(&self) -> Selector {
        selector_from_set(self)
    }
}

impl Fields for Set {
    fn has(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    fn get(&self, key: &str) -> &str {
        self.inner.get(key).map(String::as_str).unwrap_or("")
    }
}

// Values are rendered as-is, not escaped.
impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<String> = self
            .inner
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        pairs.sort();
        f.write_str(&pairs.join(","))
    }
}

impl<K, V> FromIterator<(K, V)> for Set
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Set {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Set {
    fn from(inner: BTreeMap<String, String>) -> Self {
        Set { inner }
    }
}

impl<S> From<HashMap<String, String, S>> for Set {
    fn from(map: HashMap<String, String, S>) -> Self {
        Set {
            inner: map.into_iter().collect(),
        }
    }
}
