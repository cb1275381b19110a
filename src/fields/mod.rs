pub mod set;

use std::collections::{BTreeMap, HashMap};

pub use set::Set;

/// Read access to the attributes a selector is matched against.
///
/// `get` returns `""` for an absent key, so a term `key=` matches both a
/// missing key and a key holding an empty value. Use `has` when the
/// distinction matters.
pub trait Fields {
    fn has(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> &str;
}

impl Fields for BTreeMap<String, String> {
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> &str {
        BTreeMap::get(self, key).map(String::as_str).unwrap_or("")
    }
}

impl<S: std::hash::BuildHasher> Fields for HashMap<String, String, S> {
    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &str) -> &str {
        HashMap::get(self, key).map(String::as_str).unwrap_or("")
    }
}
