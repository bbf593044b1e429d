//! Shared configuration library for Reelist.
//!
//! Centralizes the client defaults (API endpoint, TMDB access, search
//! debounce tuning), the layered loading order, and the validation rules so
//! every front-end builds its services from a single source of truth.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::{ApiConfig, ClientConfig, SearchConfig, TmdbConfig};
pub use validation::ConfigGuardRailError;
