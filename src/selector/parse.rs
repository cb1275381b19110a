use std::str::FromStr;

use tracing::debug;

use super::split::{split_term, split_terms};
use super::unescape_value;
use super::Selector;
use crate::types::SelectorError;

/// Parse selector text such as `a=b,c!=d` into a canonical `Selector::And`.
///
/// Terms come out sorted by their rendered text, so permutations of the same
/// input parse to equal selectors. Duplicate and conflicting terms are kept.
/// Any malformed term fails the whole parse.
pub fn parse_selector(selector: &str) -> Result<Selector, SelectorError> {
    let mut terms = Vec::new();

    for part in split_terms(selector) {
        let syntax_error = || SelectorError::Syntax {
            selector: selector.to_string(),
            term: part.to_string(),
        };

        let (key, op, raw_value) = match split_term(part) {
            Some(split) => split,
            None => {
                debug!(selector, term = part, "rejected selector term without operator");
                return Err(syntax_error());
            }
        };
        if key.is_empty() {
            debug!(selector, term = part, "rejected selector term with empty key");
            return Err(syntax_error());
        }

        let value = unescape_value(raw_value).map_err(|err| {
            debug!(selector, term = part, error = %err, "rejected selector value");
            SelectorError::from(err)
        })?;

        let term = match op {
            "!=" => Selector::NotHas {
                key: key.to_string(),
                value,
            },
            "=" | "==" => Selector::Has {
                key: key.to_string(),
                value,
            },
            _ => return Err(syntax_error()),
        };
        terms.push(term);
    }

    terms.sort_by_cached_key(Selector::to_string);
    debug!(selector, terms = terms.len(), "parsed selector");

    Ok(Selector::And(terms))
}

/// Single-term selector equivalent to parsing `key=value`.
///
/// The key is kept verbatim; a key containing `=` or `,` renders text that
/// does not parse back to this selector.
pub fn one_term_equal_selector(key: impl Into<String>, value: impl Into<String>) -> Selector {
    Selector::And(vec![Selector::Has {
        key: key.into(),
        value: value.into(),
    }])
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selector(s)
    }
}
