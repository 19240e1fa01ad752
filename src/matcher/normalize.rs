/// Normalize a raw hint (or key spelling) into compact matching form.
///
/// Lowercases first, then keeps only ASCII letters and digits, so
/// `"First-Name"`, `"first_name"` and `"FIRSTNAME"` all become `"firstname"`.
pub fn normalize_hint(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Normalize every hint, dropping the ones that end up empty. Order is kept.
pub fn normalize_hints<S: AsRef<str>>(hints: &[S]) -> Vec<String> {
    hints
        .iter()
        .map(|h| normalize_hint(h.as_ref()))
        .filter(|h| !h.is_empty())
        .collect()
}
