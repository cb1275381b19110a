pub mod errors;
pub mod requirement;

pub use errors::{EscapeError, SelectorError, TransformError};
pub use requirement::{Operator, Requirement};
