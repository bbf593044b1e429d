use async_trait::async_trait;
use parking_lot::RwLock;
use reelist_model::{MovieDetails, MovieSearchPage};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::infra::services::{MovieCatalog, ServiceError, ServiceResult};

/// Canned catalog keyed by `(query, page)`.
///
/// Unknown queries answer with an empty single page. Calls are recorded
/// when issued, before any configured latency elapses.
#[derive(Debug, Clone, Default)]
pub struct StubMovieCatalog {
    inner: Arc<RwLock<InnerCatalogState>>,
}

#[derive(Debug, Default)]
struct InnerCatalogState {
    pages: HashMap<(String, u32), MovieSearchPage>,
    details: HashMap<u64, MovieDetails>,
    latency: HashMap<String, Duration>,
    fail_searches: bool,
    search_calls: Vec<(String, u32)>,
}

impl StubMovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&self, query: &str, page: MovieSearchPage) {
        self.inner
            .write()
            .pages
            .insert((query.to_string(), page.page), page);
    }

    pub fn set_details(&self, details: MovieDetails) {
        self.inner.write().details.insert(details.movie.id, details);
    }

    /// Delay every answer for `query`
    pub fn set_latency(&self, query: &str, latency: Duration) {
        self.inner
            .write()
            .latency
            .insert(query.to_string(), latency);
    }

    pub fn fail_searches(&self, fail: bool) {
        self.inner.write().fail_searches = fail;
    }

    /// `(query, page)` of every search issued
    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.inner.read().search_calls.clone()
    }
}

#[async_trait]
impl MovieCatalog for StubMovieCatalog {
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> ServiceResult<MovieSearchPage> {
        let latency = {
            let mut guard = self.inner.write();
            guard.search_calls.push((query.to_string(), page));
            guard.latency.get(query).copied()
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let guard = self.inner.read();
        if guard.fail_searches {
            return Err(ServiceError::RequestFailed(
                "injected catalog failure".into(),
            ));
        }
        Ok(guard
            .pages
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or(MovieSearchPage {
                page,
                results: Vec::new(),
                total_pages: 1,
                total_results: 0,
            }))
    }

    async fn movie_details(&self, id: u64) -> ServiceResult<MovieDetails> {
        self.inner
            .read()
            .details
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("movie {id}")))
    }
}
