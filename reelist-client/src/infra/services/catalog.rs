//! Movie catalog port and its TMDB v3 implementation.

use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use reelist_config::TmdbConfig;
use reelist_model::{MovieDetails, MovieSearchPage};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::time::Duration;

use crate::infra::api_client::{HttpStatusError, normalize_base_url};
use crate::infra::constants::routes::{tmdb as routes, utils};
use crate::infra::services::{ServiceError, ServiceResult};

/// Third-party movie catalog
#[async_trait]
pub trait MovieCatalog: Send + Sync + Debug {
    /// One page of search results; pages start at 1
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> ServiceResult<MovieSearchPage>;

    async fn movie_details(&self, id: u64) -> ServiceResult<MovieDetails>;
}

/// [`MovieCatalog`] backed by the public TMDB API
#[derive(Clone)]
pub struct TmdbCatalog {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl Debug for TmdbCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbCatalog {
    pub fn new(config: &TmdbConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create TMDB HTTP client")?;
        Ok(Self {
            client,
            base_url: normalize_base_url(&config.api_base_url),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    fn search_request(&self, query: &str, page: u32) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, routes::SEARCH_MOVIE);
        self.client.get(url).query(&[
            ("api_key", self.api_key.as_str()),
            ("query", query),
            ("page", &page.to_string()),
            ("language", self.language.as_str()),
            ("include_adult", "false"),
        ])
    }

    fn details_request(&self, id: u64) -> RequestBuilder {
        let path = utils::replace_param(routes::MOVIE, "{id}", id.to_string());
        let url = format!("{}{}", self.base_url, path);
        self.client.get(url).query(&[
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ])
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> anyhow::Result<T> {
        let response = request.send().await.context("TMDB request failed")?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HttpStatusError { status, body }.into());
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).context("Invalid TMDB response body")
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> ServiceResult<MovieSearchPage> {
        debug!("[TmdbCatalog] search '{}' page {}", query, page);
        self.execute(self.search_request(query, page))
            .await
            .map_err(ServiceError::from)
    }

    async fn movie_details(&self, id: u64) -> ServiceResult<MovieDetails> {
        debug!("[TmdbCatalog] details for {}", id);
        self.execute(self.details_request(id))
            .await
            .map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer one request with `status` and `body`, returning the base URL
    /// and a handle yielding the raw request head.
    async fn one_shot(
        status: u16,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 2048];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.expect("read");
                if read == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..read]);
            }
            let reply = format!(
                "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.expect("write");
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&buf).into_owned()
        });
        (format!("http://{addr}/3"), handle)
    }

    fn catalog_at(base_url: String) -> TmdbCatalog {
        let config = TmdbConfig {
            api_base_url: base_url,
            api_key: "k3y".into(),
            language: "es-ES".into(),
            ..TmdbConfig::default()
        };
        TmdbCatalog::new(&config, Duration::from_secs(5)).expect("catalog")
    }

    fn catalog() -> TmdbCatalog {
        let config = TmdbConfig {
            api_key: "k3y".into(),
            language: "es-ES".into(),
            ..TmdbConfig::default()
        };
        TmdbCatalog::new(&config, Duration::from_secs(5)).expect("catalog")
    }

    #[test]
    fn search_url_carries_all_parameters() {
        let request = catalog()
            .search_request("el padrino", 2)
            .build()
            .expect("request");
        let url = request.url();
        assert_eq!(url.path(), "/3/search/movie");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("query".into(), "el padrino".into())));
        assert!(pairs.contains(&("page".into(), "2".into())));
        assert!(pairs.contains(&("language".into(), "es-ES".into())));
        assert!(pairs.contains(&("include_adult".into(), "false".into())));
        assert!(pairs.contains(&("api_key".into(), "k3y".into())));
    }

    #[test]
    fn details_url_embeds_movie_id() {
        let request = catalog().details_request(603).build().expect("request");
        assert_eq!(request.url().path(), "/3/movie/603");
    }

    #[tokio::test]
    async fn movie_details_decodes_runtime_and_genres() {
        let body = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/matrix.jpg",
            "release_date": "1999-03-30",
            "runtime": 136,
            "genres": [{"id": 28, "name": "Acción"}],
            "tagline": "Welcome to the Real World."
        }"#;
        let (base, request) = one_shot(200, body).await;

        let details = catalog_at(base).movie_details(603).await.expect("details");

        assert_eq!(details.movie.id, 603);
        assert_eq!(details.movie.title, "The Matrix");
        assert_eq!(details.movie.release_year(), Some(1999));
        assert_eq!(details.runtime, Some(136));
        assert_eq!(details.genres[0].name, "Acción");
        let head = request.await.expect("server task");
        assert!(head.starts_with("GET /3/movie/603?"), "got {head}");
        assert!(head.contains("api_key=k3y"));
        assert!(head.contains("language=es-ES"));
    }

    #[tokio::test]
    async fn missing_movie_is_not_found() {
        let (base, _request) =
            one_shot(404, r#"{"status_message":"not found"}"#).await;

        let err = catalog_at(base).movie_details(1).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn debug_output_hides_api_key() {
        assert!(!format!("{:?}", catalog()).contains("k3y"));
    }
}
