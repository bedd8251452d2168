/// Case-insensitive substring match; an empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility of each `(name, currently_visible)` row for `query`.
///
/// The current flag is ignored; the result depends on the name alone, so
/// callers can apply it to their rows without tracking previous state.
pub fn filter<S: AsRef<str>>(apps: &[(S, bool)], query: &str) -> Vec<bool> {
    if query.is_empty() {
        return vec![true; apps.len()];
    }
    let query = query.to_lowercase();
    apps.iter()
        .map(|(name, _)| name.as_ref().to_lowercase().contains(&query))
        .collect()
}
