use crate::matcher::normalize::normalize_hint;
use crate::profile::field_key::FieldKey;

// ============================================================================
// Keyword dictionary — how each profile field tends to appear in markup
// ============================================================================
//
// Terms are already normalized (lowercase ASCII alphanumerics) and listed in
// priority order. Short generic terms ("code", "last", "tel") trade false
// positives for recall.

const FIRST_NAME: &[&str] = &["firstname", "fname", "givenname", "first"];
const LAST_NAME: &[&str] = &["lastname", "lname", "surname", "last", "familyname"];
const EMAIL: &[&str] = &["email", "mail"];
const PHONE: &[&str] = &["phone", "tel", "mobile", "cell"];
const ADDRESS: &[&str] = &["address", "street", "addr"];
const CITY: &[&str] = &["city", "town"];
const ZIP: &[&str] = &["zip", "postal", "code"];
const COUNTRY: &[&str] = &["country", "nation"];
const NEVER: &[&str] = &[];

/// Declared terms for a key, or `None` when the dictionary has no entry.
pub fn declared_terms(key: &FieldKey) -> Option<&'static [&'static str]> {
    match key {
        FieldKey::ProfileName => Some(NEVER),
        FieldKey::FirstName => Some(FIRST_NAME),
        FieldKey::LastName => Some(LAST_NAME),
        FieldKey::Email => Some(EMAIL),
        FieldKey::Phone => Some(PHONE),
        FieldKey::Address => Some(ADDRESS),
        FieldKey::City => Some(CITY),
        FieldKey::Zip => Some(ZIP),
        FieldKey::Country => Some(COUNTRY),
        FieldKey::Other(_) => None,
    }
}

/// Ordered matching terms for one field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordTerms {
    Declared(&'static [&'static str]),
    /// Key without a dictionary entry: its own normalized spelling.
    Fallback(String),
    None,
}

impl KeywordTerms {
    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            KeywordTerms::Declared(terms) => Box::new(terms.iter().copied()),
            KeywordTerms::Fallback(term) => Box::new(std::iter::once(term.as_str())),
            KeywordTerms::None => Box::new(std::iter::empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            KeywordTerms::Declared(terms) => terms.is_empty(),
            KeywordTerms::Fallback(_) => false,
            KeywordTerms::None => true,
        }
    }
}

/// Resolve the terms used to match `key`.
///
/// An empty fallback would be a substring of every hint, so a key whose
/// spelling has no ASCII alphanumerics gets no terms at all.
pub fn keyword_terms(key: &FieldKey) -> KeywordTerms {
    if let Some(terms) = declared_terms(key) {
        return KeywordTerms::Declared(terms);
    }

    let fallback = normalize_hint(key.as_str());
    if fallback.is_empty() {
        KeywordTerms::None
    } else {
        KeywordTerms::Fallback(fallback)
    }
}
