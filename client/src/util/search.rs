//! Row filtering for the users table search box.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Whether any cell contains `term`, ignoring case. The term is not trimmed;
/// only the empty term matches every row.
pub fn row_matches<S: AsRef<str>>(cells: &[S], term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    cells.iter().any(|cell| cell.as_ref().to_lowercase().contains(&needle))
}
