pub mod escape;
pub mod parse;
pub mod split;
pub mod transform;

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::fields::{Fields, Set};
use crate::types::{Operator, Requirement};
pub use escape::{escape_value, unescape_value};
pub use parse::{one_term_equal_selector, parse_selector};
pub use split::{split_term, split_terms};
pub use transform::parse_and_transform_selector;

/// A conjunction of equality and inequality terms over named fields.
///
/// Values are stored unescaped. An `And` with no non-empty terms matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `key=value`
    Has { key: String, value: String },
    /// `key!=value`
    NotHas { key: String, value: String },
    And(Vec<Selector>),
}

/// The selector that matches every set of fields.
pub fn everything() -> Selector {
    Selector::And(Vec::new())
}

/// Exact-match selector with one `Has` term per field of `set`.
///
/// Keys are rendered verbatim, only values are escaped. A key containing `=`
/// or `,` renders text that does not parse back: `{"a=b": "c"}` renders
/// `a=b=c`.
pub fn selector_from_set(set: &Set) -> Selector {
    Selector::And(
        set.iter()
            .map(|(key, value)| Selector::Has {
                key: key.clone(),
                value: value.clone(),
            })
            .collect(),
    )
}

impl Default for Selector {
    fn default() -> Self {
        everything()
    }
}

impl Selector {
    /// Absent fields compare as `""`. Terms with an empty key are empty and
    /// match everything.
    pub fn matches<F: Fields + ?Sized>(&self, fields: &F) -> bool {
        match self {
            Selector::Has { key, .. } | Selector::NotHas { key, .. } if key.is_empty() => true,
            Selector::Has { key, value } => fields.get(key) == value,
            Selector::NotHas { key, value } => fields.get(key) != value,
            Selector::And(terms) => terms.iter().all(|term| term.matches(fields)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selector::Has { key, .. } | Selector::NotHas { key, .. } => key.is_empty(),
            Selector::And(terms) => terms.iter().all(Selector::is_empty),
        }
    }

    /// Value that `key` must equal for this selector to match, if any term
    /// pins it. Lets callers push an equality down into an index lookup.
    pub fn requires_exact_match(&self, key: &str) -> Option<&str> {
        match self {
            Selector::Has { key: k, value } if !k.is_empty() && k == key => Some(value.as_str()),
            Selector::Has { .. } | Selector::NotHas { .. } => None,
            Selector::And(terms) => terms.iter().find_map(|term| term.requires_exact_match(key)),
        }
    }

    /// The non-empty terms, flattened, in canonical order.
    pub fn requirements(&self) -> Vec<Requirement> {
        let mut leaves = Vec::new();
        self.collect_terms(&mut leaves);

        let mut rendered: Vec<(String, Requirement)> = leaves
            .into_iter()
            .filter_map(|term| {
                let requirement = match term {
                    Selector::Has { key, value } => Requirement {
                        operator: Operator::Equals,
                        key: key.clone(),
                        value: value.clone(),
                    },
                    Selector::NotHas { key, value } => Requirement {
                        operator: Operator::NotEquals,
                        key: key.clone(),
                        value: value.clone(),
                    },
                    Selector::And(_) => return None,
                };
                Some((term.to_string(), requirement))
            })
            .collect();
        rendered.sort_by(|a, b| a.0.cmp(&b.0));

        rendered.into_iter().map(|(_, requirement)| requirement).collect()
    }

    /// Content hash of the canonical text.
    ///
    /// Two selectors share a fingerprint iff they render identically.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_string().as_bytes());

        let hash = hasher.finalize();
        format!("sha256:{}", hex::encode(hash))
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a Selector>) {
        match self {
            Selector::And(terms) => terms.iter().for_each(|term| term.collect_terms(out)),
            term if !term.is_empty() => out.push(term),
            _ => {}
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Has { key, value } => write!(f, "{key}={}", escape_value(value)),
            Selector::NotHas { key, value } => write!(f, "{key}!={}", escape_value(value)),
            Selector::And(_) => {
                // Leaves of nested `And`s sort together with their siblings.
                let mut leaves = Vec::new();
                self.collect_terms(&mut leaves);

                let mut rendered: Vec<String> = leaves.iter().map(|term| term.to_string()).collect();
                rendered.sort();
                f.write_str(&rendered.join(","))
            }
        }
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_selector(&text).map_err(de::Error::custom)
    }
}
