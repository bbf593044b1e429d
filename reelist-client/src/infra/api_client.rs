use anyhow::{Context, Result};
use log::{debug, info, warn};
use reelist_config::ApiConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::infra::session::AuthSession;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Non-success HTTP status returned by the backend.
///
/// Carried inside the `anyhow::Error` so service code can classify
/// failures by status without parsing messages.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Request failed with status {status}: {body}")]
pub struct HttpStatusError {
    pub status: StatusCode,
    pub body: String,
}

/// API client for the lists backend with bearer authentication
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: AuthSession,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.session.is_authenticated())
            .finish()
    }
}

/// Add `http://` when the scheme is missing and drop trailing slashes.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

impl ApiClient {
    /// Create a client with the default 30s timeout
    pub fn new(base_url: &str, session: AuthSession) -> Result<Self> {
        Self::build(base_url, DEFAULT_TIMEOUT, false, session)
    }

    /// Create a client from the `api` config section
    pub fn from_config(config: &ApiConfig, session: AuthSession) -> Result<Self> {
        Self::build(
            &config.base_url,
            config.request_timeout(),
            config.accept_invalid_certs,
            session,
        )
    }

    fn build(
        base_url: &str,
        timeout: Duration,
        accept_invalid_certs: bool,
        session: AuthSession,
    ) -> Result<Self> {
        let base_url = normalize_base_url(base_url);
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .context("Failed to create HTTP client")?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// Join a route onto the base URL. Absolute URLs pass through.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Attach the bearer token of the current session, if any
    pub fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => {
                builder.header("Authorization", format!("Bearer {}", token))
            }
            None => builder,
        }
    }

    /// Turn a non-success response into an [`HttpStatusError`].
    async fn status_error(&self, response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("[ApiClient] Unauthorized response, clearing session");
            self.session.sign_out();
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        HttpStatusError { status, body }.into()
    }

    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T> {
        let response = self
            .build_request(request)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Invalid response body from {}", url))
    }

    async fn execute_no_content(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<()> {
        let response = self
            .build_request(request)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.status_error(response).await)
        }
    }

    /// GET request with authentication
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {}", url);
        self.execute_request(self.client.get(&url), &url).await
    }

    /// GET request with query parameters
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.build_url(path);
        debug!("[ApiClient] GET {} (with query)", url);
        self.execute_request(self.client.get(&url).query(query), &url)
            .await
    }

    /// POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST {}", url);
        self.execute_request(self.client.post(&url).json(body), &url)
            .await
    }

    /// PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let url = self.build_url(path);
        debug!("[ApiClient] PUT {}", url);
        self.execute_request(self.client.put(&url).json(body), &url)
            .await
    }

    /// DELETE request; any 2xx counts as success and the body is ignored
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!("[ApiClient] DELETE {}", url);
        self.execute_no_content(self.client.delete(&url), &url).await
    }
}
