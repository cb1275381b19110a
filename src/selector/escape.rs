use crate::types::EscapeError;

/// Characters that carry meaning in selector text.
const RESERVED: [char; 3] = ['\\', '=', ','];

/// Prefix every reserved character with a backslash.
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Inverse of [`escape_value`].
///
/// Only `\\`, `\=` and `\,` are valid escapes, and `=` / `,` may not appear
/// unescaped.
pub fn unescape_value(value: &str) -> Result<String, EscapeError> {
    if !value.contains(&RESERVED[..]) {
        return Ok(value.to_string());
    }

    let mut out = String::with_capacity(value.len());
    let mut in_slash = false;
    for c in value.chars() {
        if in_slash {
            if !RESERVED.contains(&c) {
                return Err(EscapeError::InvalidEscapeSequence {
                    sequence: format!("\\{c}"),
                });
            }
            out.push(c);
            in_slash = false;
            continue;
        }
        match c {
            '\\' => in_slash = true,
            '=' | ',' => return Err(EscapeError::UnescapedRune { rune: c }),
            _ => out.push(c),
        }
    }

    if in_slash {
        return Err(EscapeError::InvalidEscapeSequence {
            sequence: "\\".to_string(),
        });
    }
    Ok(out)
}
