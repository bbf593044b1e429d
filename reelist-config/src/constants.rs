pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub const DEFAULT_TMDB_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_TMDB_LANGUAGE: &str = "es-ES";

pub const DEFAULT_MOVIE_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_LIST_DEBOUNCE_MS: u64 = 1_500;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_LIST_SEARCH_LIMIT: u32 = 20;

pub const ENV_CONFIG_PATH: &str = "REELIST_CONFIG_PATH";
pub const ENV_CONFIG_JSON: &str = "REELIST_CONFIG_JSON";
pub const ENV_API_URL: &str = "REELIST_API_URL";
pub const ENV_ACCEPT_INVALID_CERTS: &str = "REELIST_ACCEPT_INVALID_CERTS";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "REELIST_REQUEST_TIMEOUT_MS";
pub const ENV_TMDB_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_TMDB_LANGUAGE: &str = "TMDB_LANGUAGE";

pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "reelist.toml",
    "reelist.json",
    "config/reelist.toml",
    "config/reelist.json",
];
