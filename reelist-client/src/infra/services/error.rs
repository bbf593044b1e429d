use reqwest::StatusCode;
use thiserror::Error;

use crate::infra::api_client::HttpStatusError;

/// Errors surfaced by the service traits
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized - please login again")]
    Unauthorized,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationError(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(http) = err.downcast_ref::<HttpStatusError>() {
            return match http.status {
                StatusCode::NOT_FOUND => ServiceError::NotFound(http.body.clone()),
                StatusCode::UNAUTHORIZED => ServiceError::Unauthorized,
                _ => ServiceError::RequestFailed(http.to_string()),
            };
        }
        if err.downcast_ref::<serde_json::Error>().is_some() {
            return ServiceError::DeserializationError(format!("{:#}", err));
        }
        if let Some(req) = err.downcast_ref::<reqwest::Error>()
            && req.is_decode()
        {
            return ServiceError::DeserializationError(format!("{:#}", err));
        }
        ServiceError::RequestFailed(format!("{:#}", err))
    }
}
