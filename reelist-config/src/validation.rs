use thiserror::Error;
use url::Url;

use crate::models::ClientConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("api.base_url must not be empty")]
    EmptyApiBaseUrl,
    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("api.request_timeout_ms must be greater than zero")]
    ZeroTimeout,
    #[error("search.min_query_len must be at least 1")]
    ZeroMinQueryLen,
    #[error("search.list_search_limit must be at least 1")]
    ZeroListSearchLimit,
}

fn check_url(
    field: &'static str,
    value: &str,
) -> Result<(), ConfigGuardRailError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigGuardRailError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

impl ClientConfig {
    /// Reject settings the client cannot run with.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigGuardRailError::EmptyApiBaseUrl);
        }
        check_url("api.base_url", self.api.base_url.trim())?;
        check_url("tmdb.api_base_url", self.tmdb.api_base_url.trim())?;
        check_url("tmdb.image_base_url", self.tmdb.image_base_url.trim())?;

        if self.api.request_timeout_ms == 0 {
            return Err(ConfigGuardRailError::ZeroTimeout);
        }
        if self.search.min_query_len == 0 {
            return Err(ConfigGuardRailError::ZeroMinQueryLen);
        }
        if self.search.list_search_limit == 0 {
            return Err(ConfigGuardRailError::ZeroListSearchLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ClientConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_schemeless_api_url() {
        let mut config = ClientConfig::default();
        config.api.base_url = "localhost:3000".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigGuardRailError::InvalidUrl {
                field: "api.base_url",
                ..
            })
        ));
    }

    #[test]
    fn rejects_zero_limits() {
        let mut config = ClientConfig::default();
        config.search.min_query_len = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigGuardRailError::ZeroMinQueryLen)
        );

        let mut config = ClientConfig::default();
        config.api.request_timeout_ms = 0;
        assert_eq!(config.validate(), Err(ConfigGuardRailError::ZeroTimeout));
    }
}
