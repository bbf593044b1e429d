//! Debounced search stores for the movie catalog and public lists.

pub mod debounce;
pub mod list_search;
pub mod movie_search;

pub use debounce::{Debouncer, RequestGeneration};
pub use list_search::{ListSearchState, ListSearchStore};
pub use movie_search::{MovieSearchState, MovieSearchStore};

/// Trimmed query if it is long enough to hit the network.
///
/// Length is counted in characters so accented input behaves like ASCII.
pub(crate) fn searchable_query(raw: &str, min_len: usize) -> Option<String> {
    let trimmed = raw.trim();
    (trimmed.chars().count() >= min_len).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::searchable_query;

    #[test]
    fn short_or_blank_queries_are_not_searchable() {
        assert_eq!(searchable_query("", 2), None);
        assert_eq!(searchable_query("  a  ", 2), None);
        assert_eq!(searchable_query("é", 2), None);
        assert_eq!(searchable_query(" ét ", 2).as_deref(), Some("ét"));
    }
}
