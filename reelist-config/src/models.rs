use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LIST_DEBOUNCE_MS, DEFAULT_LIST_SEARCH_LIMIT,
    DEFAULT_MIN_QUERY_LEN, DEFAULT_MOVIE_DEBOUNCE_MS,
    DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_TMDB_API_BASE_URL,
    DEFAULT_TMDB_IMAGE_BASE_URL, DEFAULT_TMDB_LANGUAGE,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub tmdb: TmdbConfig,
    pub search: SearchConfig,
}

/// Lists backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root every `/lists` path is joined onto.
    pub base_url: String,
    pub request_timeout_ms: u64,
    /// Accept self-signed certificates (local development servers).
    pub accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            accept_invalid_certs: false,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Movie catalog access.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    /// Left empty when only list features are used; catalog search then
    /// fails with an unauthorized error.
    pub api_key: String,
    pub language: String,
}

impl std::fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_base_url", &self.api_base_url)
            .field("image_base_url", &self.image_base_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .field("language", &self.language)
            .finish()
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_TMDB_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
            api_key: String::new(),
            language: DEFAULT_TMDB_LANGUAGE.to_string(),
        }
    }
}

/// Search-as-you-type tuning for the catalog and public list searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub movie_debounce_ms: u64,
    pub list_debounce_ms: u64,
    /// Queries shorter than this (in characters, after trimming) reset the
    /// search instead of hitting the network.
    pub min_query_len: usize,
    pub list_search_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movie_debounce_ms: DEFAULT_MOVIE_DEBOUNCE_MS,
            list_debounce_ms: DEFAULT_LIST_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            list_search_limit: DEFAULT_LIST_SEARCH_LIMIT,
        }
    }
}

impl SearchConfig {
    pub fn movie_debounce(&self) -> Duration {
        Duration::from_millis(self.movie_debounce_ms)
    }

    pub fn list_debounce(&self) -> Duration {
        Duration::from_millis(self.list_debounce_ms)
    }
}
