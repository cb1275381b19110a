use thiserror::Error;

/// Failure to decode an escaped selector value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("invalid escape sequence: '{sequence}'")]
    InvalidEscapeSequence { sequence: String },

    /// `=` and `,` must be escaped inside a value.
    #[error("unescaped '{rune}' is not allowed in a selector value")]
    UnescapedRune { rune: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("invalid selector: '{selector}'; can't understand '{term}'")]
    Syntax { selector: String, term: String },

    #[error("invalid selector value: {0}")]
    InvalidValue(#[from] EscapeError),
}

/// Error returned by `parse_and_transform_selector`.
///
/// `Rewrite` carries the caller's error exactly as the rewrite function
/// returned it.
#[derive(Debug, Error)]
pub enum TransformError<E> {
    #[error(transparent)]
    Parse(#[from] SelectorError),

    #[error("selector transform failed: {0}")]
    Rewrite(E),
}
