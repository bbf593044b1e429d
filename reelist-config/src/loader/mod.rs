//! Layered configuration loading.
//!
//! Evaluation order, later layers winning:
//! 1) built-in defaults,
//! 2) `$REELIST_CONFIG_PATH` (TOML or JSON file), otherwise the first
//!    existing default candidate (`reelist.toml`, `reelist.json`, ...),
//! 3) `$REELIST_CONFIG_JSON` (inline JSON, merged key by key),
//! 4) individual environment variables (`REELIST_API_URL`, `TMDB_API_KEY`,
//!    ...).
//!
//! Variables from an optional `.env` file fill in anything the process
//! environment leaves unset; they never override it.

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::constants::{
    DEFAULT_CONFIG_CANDIDATES, ENV_ACCEPT_INVALID_CERTS, ENV_API_URL,
    ENV_CONFIG_JSON, ENV_CONFIG_PATH, ENV_REQUEST_TIMEOUT_MS,
    ENV_TMDB_API_KEY, ENV_TMDB_LANGUAGE,
};
use crate::models::ClientConfig;
use crate::util::{EnvLookup, non_empty, parse_bool, process_env};

use self::error::ConfigLoadError;

/// Source that produced the file layer of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    File(PathBuf),
}

/// Result of a load: the effective config plus where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    pub source: ConfigSource,
    pub inline_json_applied: bool,
    pub env_file_loaded: bool,
    /// Names of the environment variables that overrode a setting.
    pub env_overrides: Vec<&'static str>,
}

pub struct ConfigLoader {
    env: Arc<EnvLookup>,
    root: PathBuf,
    env_file: Option<PathBuf>,
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("root", &self.root)
            .field("env_file", &self.env_file)
            .finish()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading the process environment, resolving files relative
    /// to the working directory and picking up `./.env` when present.
    pub fn new() -> Self {
        Self {
            env: Arc::new(process_env),
            root: PathBuf::from("."),
            env_file: Some(PathBuf::from(".env")),
        }
    }

    /// Replace the environment with a custom lookup.
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Arc::new(env);
        self
    }

    /// Directory the default candidates and `.env` are resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_env_file(mut self, env_file: Option<PathBuf>) -> Self {
        self.env_file = env_file;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env, env_file_loaded) = self.effective_env()?;

        let (mut config, source) = self.load_file_layer(env.as_ref())?;

        let mut inline_json_applied = false;
        if let Some(raw) = non_empty(env.as_ref(), ENV_CONFIG_JSON) {
            config = merge_inline_json(&config, &raw)?;
            inline_json_applied = true;
        }

        let env_overrides = apply_env_overrides(&mut config, env.as_ref())?;

        config.validate()?;

        info!(
            source = ?source,
            inline_json = inline_json_applied,
            env_file = env_file_loaded,
            overrides = ?env_overrides,
            "client configuration loaded"
        );

        Ok(ConfigLoad {
            config,
            source,
            inline_json_applied,
            env_file_loaded,
            env_overrides,
        })
    }

    fn effective_env(
        &self,
    ) -> Result<(Arc<EnvLookup>, bool), ConfigLoadError> {
        let Some(env_file) = &self.env_file else {
            return Ok((Arc::clone(&self.env), false));
        };
        let path = self.resolve(env_file);
        if !path.exists() {
            return Ok((Arc::clone(&self.env), false));
        }

        let mut from_file = HashMap::new();
        for entry in dotenvy::from_path_iter(&path)? {
            let (key, value) = entry?;
            from_file.insert(key, value);
        }
        debug!(path = %path.display(), vars = from_file.len(), "read env file");

        let primary = Arc::clone(&self.env);
        let merged: Arc<EnvLookup> = Arc::new(move |name: &str| {
            primary(name).or_else(|| from_file.get(name).cloned())
        });
        Ok((merged, true))
    }

    fn load_file_layer(
        &self,
        env: &EnvLookup,
    ) -> Result<(ClientConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = non_empty(env, ENV_CONFIG_PATH) {
            let path = PathBuf::from(path);
            let config = load_from_file(&self.resolve(&path))?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((ClientConfig::default(), ConfigSource::Default))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.exists())
    }
}

/// Parse a config file, choosing the format from the extension. Unknown
/// extensions try TOML first, then JSON.
pub fn load_from_file(path: &Path) -> Result<ClientConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let toml_err = |source| ConfigLoadError::Toml {
        path: path.to_path_buf(),
        source,
    };
    let json_err = |source| ConfigLoadError::Json {
        origin: path.display().to_string(),
        source,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(json_err),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(toml_err)
        }
        _ => toml::from_str(&contents).or_else(|_| {
            serde_json::from_str(&contents).map_err(json_err)
        }),
    }
}

fn merge_inline_json(
    base: &ClientConfig,
    raw: &str,
) -> Result<ClientConfig, ConfigLoadError> {
    let json_err = |source| ConfigLoadError::Json {
        origin: ENV_CONFIG_JSON.to_string(),
        source,
    };

    let overlay: Value = serde_json::from_str(raw).map_err(json_err)?;
    let mut merged = serde_json::to_value(base).map_err(json_err)?;
    merge_values(&mut merged, overlay);
    serde_json::from_value(merged).map_err(json_err)
}

fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn apply_env_overrides(
    config: &mut ClientConfig,
    env: &EnvLookup,
) -> Result<Vec<&'static str>, ConfigLoadError> {
    let mut applied = Vec::new();

    if let Some(url) = non_empty(env, ENV_API_URL) {
        config.api.base_url = url;
        applied.push(ENV_API_URL);
    }

    if let Some(raw) = non_empty(env, ENV_REQUEST_TIMEOUT_MS) {
        config.api.request_timeout_ms = raw.parse().map_err(|_| {
            ConfigLoadError::InvalidEnvValue {
                name: ENV_REQUEST_TIMEOUT_MS,
                value: raw.clone(),
            }
        })?;
        applied.push(ENV_REQUEST_TIMEOUT_MS);
    }

    if let Some(raw) = non_empty(env, ENV_ACCEPT_INVALID_CERTS) {
        config.api.accept_invalid_certs = parse_bool(&raw).ok_or_else(|| {
            ConfigLoadError::InvalidEnvValue {
                name: ENV_ACCEPT_INVALID_CERTS,
                value: raw.clone(),
            }
        })?;
        applied.push(ENV_ACCEPT_INVALID_CERTS);
    }

    if let Some(key) = non_empty(env, ENV_TMDB_API_KEY) {
        config.tmdb.api_key = key;
        applied.push(ENV_TMDB_API_KEY);
    }

    if let Some(language) = non_empty(env, ENV_TMDB_LANGUAGE) {
        config.tmdb.language = language;
        applied.push(ENV_TMDB_LANGUAGE);
    }

    Ok(applied)
}
