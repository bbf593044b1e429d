//! Search-as-you-type over the movie catalog with page-by-page loading.

use log::{debug, error};
use reelist_config::SearchConfig;
use reelist_model::{Movie, MovieSearchPage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::common::{LoadPhase, StateCell};
use crate::domains::search::debounce::{Debouncer, RequestGeneration};
use crate::domains::search::searchable_query;
use crate::infra::constants::messages::search as messages;
use crate::infra::services::{MovieCatalog, ServiceResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieSearchState {
    /// Raw text as typed
    pub query: String,
    /// Trimmed query the current results belong to
    pub searched_query: String,
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
    pub current_page: u32,
    pub total_pages: u32,
}

impl MovieSearchState {
    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn phase(&self) -> LoadPhase {
        LoadPhase::from_flags(
            self.loading,
            false,
            self.error.is_some(),
            self.has_searched,
        )
    }

    /// Drop results and flags, keeping the typed text
    fn reset_results(&mut self) {
        let query = std::mem::take(&mut self.query);
        *self = Self {
            query,
            ..Self::default()
        };
    }
}

/// Debounced catalog search.
///
/// `set_query` must be called from within a tokio runtime; the search runs
/// on a spawned task once typing pauses for the debounce delay.
#[derive(Debug, Clone)]
pub struct MovieSearchStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    catalog: Arc<dyn MovieCatalog>,
    state: StateCell<MovieSearchState>,
    debouncer: Debouncer,
    generation: RequestGeneration,
    min_query_len: usize,
}

impl MovieSearchStore {
    pub fn new(catalog: Arc<dyn MovieCatalog>, config: &SearchConfig) -> Self {
        Self::with_timing(catalog, config.movie_debounce(), config.min_query_len)
    }

    pub fn with_timing(
        catalog: Arc<dyn MovieCatalog>,
        debounce: Duration,
        min_query_len: usize,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog,
                state: StateCell::default(),
                debouncer: Debouncer::new(debounce),
                generation: RequestGeneration::new(),
                min_query_len,
            }),
        }
    }

    pub fn state(&self) -> MovieSearchState {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<MovieSearchState> {
        self.inner.state.subscribe()
    }

    pub fn phase(&self) -> LoadPhase {
        self.inner.state.with(MovieSearchState::phase)
    }

    pub fn has_more_pages(&self) -> bool {
        self.inner.state.with(MovieSearchState::has_more_pages)
    }

    /// Record a keystroke. Short queries reset immediately; longer ones
    /// (re)start the debounce timer.
    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        let generation = self.inner.generation.advance();
        let searchable = searchable_query(&query, self.inner.min_query_len);

        match searchable {
            None => {
                self.inner.debouncer.cancel();
                self.inner.state.update(|s| {
                    s.query = query;
                    s.reset_results();
                });
            }
            Some(term) => {
                self.inner.state.update(|s| s.query = query);
                let store = self.clone();
                self.inner.debouncer.schedule(async move {
                    store.run_search(term, generation).await;
                });
            }
        }
    }

    /// Search the current query right away, skipping the debounce
    pub async fn search_now(&self) {
        self.inner.debouncer.cancel();
        let generation = self.inner.generation.advance();
        let query = self.inner.state.with(|s| s.query.clone());

        match searchable_query(&query, self.inner.min_query_len) {
            Some(term) => self.run_search(term, generation).await,
            None => self.inner.state.update(MovieSearchState::reset_results),
        }
    }

    /// Append the next page. No-op while loading, before any search, or
    /// once the last page is in.
    pub async fn load_more_movies(&self) {
        let generation = self.inner.generation.current();
        let mut request = None;
        self.inner.state.update_if(|s| {
            if s.loading || !s.has_searched || !s.has_more_pages() {
                return false;
            }
            s.loading = true;
            s.error = None;
            request = Some((s.searched_query.clone(), s.current_page + 1));
            true
        });
        let Some((term, page)) = request else {
            return;
        };

        debug!("[MovieSearch] loading page {} for '{}'", page, term);
        let result = self.inner.catalog.search_movies(&term, page).await;
        self.apply(result, &term, generation, true);
    }

    /// Cancel any pending search and return to the initial state
    pub fn clear(&self) {
        self.inner.debouncer.cancel();
        self.inner.generation.advance();
        self.inner.state.update(|s| *s = MovieSearchState::default());
    }

    async fn run_search(&self, term: String, generation: u64) {
        let mut claimed = None;
        self.inner.state.update_if(|s| {
            claimed = self.inner.generation.claim(generation);
            if claimed.is_none() {
                return false;
            }
            s.loading = true;
            s.error = None;
            true
        });
        let Some(generation) = claimed else {
            debug!("[MovieSearch] '{}' superseded before sending", term);
            return;
        };

        debug!("[MovieSearch] searching '{}'", term);
        let result = self.inner.catalog.search_movies(&term, 1).await;
        self.apply(result, &term, generation, false);
    }

    fn apply(
        &self,
        result: ServiceResult<MovieSearchPage>,
        term: &str,
        generation: u64,
        append: bool,
    ) {
        let applied = self.inner.state.update_if(|s| {
            if !self.inner.generation.is_current(generation) {
                return false;
            }
            s.loading = false;
            s.has_searched = true;
            match result {
                Ok(page) => {
                    if append {
                        s.movies.extend(page.results);
                    } else {
                        s.movies = page.results;
                        s.searched_query = term.to_string();
                    }
                    s.current_page = page.page;
                    s.total_pages = page.total_pages;
                }
                Err(err) => {
                    error!("[MovieSearch] search for '{}' failed: {}", term, err);
                    s.error = Some(messages::MOVIES_FAILED.to_string());
                    if !append {
                        s.movies.clear();
                        s.searched_query = term.to_string();
                        s.current_page = 0;
                        s.total_pages = 0;
                    }
                }
            }
            true
        });
        if !applied {
            debug!(
                "[MovieSearch] dropped stale response for '{}' (generation {})",
                term, generation
            );
        }
    }
}
