//! Route templates for the lists backend and the TMDB v3 API.

/// List endpoints, relative to the configured API base URL
pub mod lists {
    pub const COLLECTION: &str = "/lists";
    pub const MY_LISTS: &str = "/lists/my-lists";
    pub const BY_USER: &str = "/lists/user/{user_id}";
    pub const SEARCH: &str = "/lists/search";
    pub const ITEM: &str = "/lists/{id}";
    pub const ITEMS: &str = "/lists/{id}/items";
    pub const ITEM_ENTRY: &str = "/lists/{id}/items/{item_id}";
}

/// TMDB endpoints, relative to the configured TMDB API base URL
pub mod tmdb {
    pub const SEARCH_MOVIE: &str = "/search/movie";
    pub const MOVIE: &str = "/movie/{id}";
}

/// Helper utilities for working with route templates
pub mod utils {
    /// Replace a single path parameter (e.g. `"{id}"`) with the provided value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }

    /// Replace multiple path parameters in order.
    pub fn replace_params(
        route: &str,
        params: &[(&str, &str)],
    ) -> String {
        let mut path = route.to_string();
        for (param, value) in params {
            path = path.replace(param, value);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_nested_item_route() {
        let path = utils::replace_params(
            lists::ITEM_ENTRY,
            &[("{id}", "abc"), ("{item_id}", "def")],
        );
        assert_eq!(path, "/lists/abc/items/def");
        assert_eq!(
            utils::replace_param(lists::BY_USER, "{user_id}", "u1"),
            "/lists/user/u1"
        );
    }
}
