/// Operators in match order: two-character tokens before `=`.
const TERM_OPERATORS: [&str; 3] = ["!=", "==", "="];

/// Split selector text on commas that are not escaped.
///
/// Empty input gives no terms. Stray commas give empty terms, which the
/// parser rejects.
pub fn split_terms(selector: &str) -> Vec<&str> {
    if selector.is_empty() {
        return Vec::new();
    }

    let mut terms = Vec::with_capacity(1);
    let mut start = 0;
    let mut in_slash = false;
    for (i, c) in selector.char_indices() {
        if in_slash {
            in_slash = false;
        } else if c == '\\' {
            in_slash = true;
        } else if c == ',' {
            terms.push(&selector[start..i]);
            start = i + 1;
        }
    }
    terms.push(&selector[start..]);
    terms
}

/// Split one term at its first unescaped operator into `(key, op, value)`.
///
/// The value is returned still escaped.
pub fn split_term(term: &str) -> Option<(&str, &str, &str)> {
    let mut in_slash = false;
    for (i, c) in term.char_indices() {
        if in_slash {
            in_slash = false;
            continue;
        }
        if c == '\\' {
            in_slash = true;
            continue;
        }
        let remaining = &term[i..];
        if let Some(op) = TERM_OPERATORS.iter().find(|op| remaining.starts_with(**op)) {
            return Some((&term[..i], *op, &term[i + op.len()..]));
        }
    }
    None
}
