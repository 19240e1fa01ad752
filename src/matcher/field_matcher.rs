use crate::matcher::dictionary::keyword_terms;
use crate::matcher::normalize::normalize_hints;
use crate::profile::field_key::FieldKey;

/// Pick the profile key a control should be bound to, if any.
///
/// Priority is strict: keys in the order given, then each key's terms in
/// dictionary order, then hints in extraction order. The first hint that
/// contains a term as a substring decides. The escape key never matches.
pub fn find_match<'k, S, I>(hints: &[S], keys: I) -> Option<&'k FieldKey>
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'k FieldKey>,
{
    let normalized = normalize_hints(hints);
    if normalized.is_empty() {
        return None;
    }

    keys.into_iter()
        .filter(|key| !key.is_escape())
        .find(|key| {
            keyword_terms(key)
                .iter()
                .any(|term| normalized.iter().any(|hint| hint.contains(term)))
        })
}
