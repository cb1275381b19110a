use tracing::trace;

use super::{parse_selector, Selector};
use crate::types::TransformError;

impl Selector {
    /// Rewrite every term with `f(key, value) -> (key, value)`.
    ///
    /// A term rewritten to an empty key is dropped. The first error from `f`
    /// aborts the rewrite and is returned unchanged.
    pub fn transform<F, E>(&self, mut f: F) -> Result<Selector, E>
    where
        F: FnMut(&str, &str) -> Result<(String, String), E>,
    {
        self.transform_with(&mut f)
    }

    fn transform_with<F, E>(&self, f: &mut F) -> Result<Selector, E>
    where
        F: FnMut(&str, &str) -> Result<(String, String), E>,
    {
        match self {
            Selector::Has { key, value } => {
                let (key, value) = f(key.as_str(), value.as_str())?;
                Ok(rewritten(key, value, |key, value| Selector::Has { key, value }))
            }
            Selector::NotHas { key, value } => {
                let (key, value) = f(key.as_str(), value.as_str())?;
                Ok(rewritten(key, value, |key, value| Selector::NotHas { key, value }))
            }
            Selector::And(terms) => {
                let mut next = Vec::with_capacity(terms.len());
                for term in terms {
                    let term = term.transform_with(f)?;
                    if !term.is_empty() {
                        next.push(term);
                    }
                }
                Ok(Selector::And(next))
            }
        }
    }
}

fn rewritten(key: String, value: String, build: impl FnOnce(String, String) -> Selector) -> Selector {
    if key.is_empty() {
        trace!(value = %value, "transform dropped selector term");
        return super::everything();
    }
    build(key, value)
}

/// Parse `selector` and rewrite its terms with `f`; see [`Selector::transform`].
pub fn parse_and_transform_selector<F, E>(selector: &str, f: F) -> Result<Selector, TransformError<E>>
where
    F: FnMut(&str, &str) -> Result<(String, String), E>,
{
    let parsed = parse_selector(selector)?;
    parsed.transform(f).map_err(TransformError::Rewrite)
}
