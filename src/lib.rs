//! Field and label selectors.
//!
//! `field-selection` parses selector text such as `app=web,tier!=cache` into a
//! conjunction of equality and inequality terms, matches it against sets of
//! fields, renders it back to canonical text, and rewrites it term by term.
//! Rendering is deterministic: selectors built from the same terms in any
//! order produce the same text, byte-for-byte.

pub mod fields;
pub mod selector;
pub mod types;

pub use fields::{Fields, Set};
pub use selector::{
    escape_value, everything, one_term_equal_selector, parse_and_transform_selector,
    parse_selector, selector_from_set, unescape_value, Selector,
};
pub use types::{EscapeError, Operator, Requirement, SelectorError, TransformError};
