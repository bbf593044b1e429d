//! Debounced title search over public lists.

use log::{debug, error};
use reelist_config::SearchConfig;
use reelist_model::{ListWithOwner, PaginatedResponse};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::common::{LoadPhase, StateCell};
use crate::domains::search::debounce::{Debouncer, RequestGeneration};
use crate::domains::search::searchable_query;
use crate::infra::constants::messages::search as messages;
use crate::infra::services::{ListsService, ServiceResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSearchState {
    pub query: String,
    pub lists: Vec<ListWithOwner>,
    /// Total matches reported by the server; may exceed `lists.len()`
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub has_searched: bool,
}

impl ListSearchState {
    pub fn phase(&self) -> LoadPhase {
        LoadPhase::from_flags(
            self.loading,
            false,
            self.error.is_some(),
            self.has_searched,
        )
    }

    fn reset_results(&mut self) {
        let query = std::mem::take(&mut self.query);
        *self = Self {
            query,
            ..Self::default()
        };
    }
}

/// Public list search. Only the first page is fetched.
#[derive(Debug, Clone)]
pub struct ListSearchStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    service: Arc<dyn ListsService>,
    state: StateCell<ListSearchState>,
    debouncer: Debouncer,
    generation: RequestGeneration,
    min_query_len: usize,
    limit: u32,
}

impl ListSearchStore {
    pub fn new(service: Arc<dyn ListsService>, config: &SearchConfig) -> Self {
        Self::with_timing(
            service,
            config.list_debounce(),
            config.min_query_len,
            config.list_search_limit,
        )
    }

    pub fn with_timing(
        service: Arc<dyn ListsService>,
        debounce: Duration,
        min_query_len: usize,
        limit: u32,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                service,
                state: StateCell::default(),
                debouncer: Debouncer::new(debounce),
                generation: RequestGeneration::new(),
                min_query_len,
                limit,
            }),
        }
    }

    pub fn state(&self) -> ListSearchState {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListSearchState> {
        self.inner.state.subscribe()
    }

    pub fn phase(&self) -> LoadPhase {
        self.inner.state.with(ListSearchState::phase)
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        let generation = self.inner.generation.advance();

        match searchable_query(&query, self.inner.min_query_len) {
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

    pub async fn search_now(&self) {
        self.inner.debouncer.cancel();
        let generation = self.inner.generation.advance();
        let query = self.inner.state.with(|s| s.query.clone());

        match searchable_query(&query, self.inner.min_query_len) {
            Some(term) => self.run_search(term, generation).await,
            None => self.inner.state.update(ListSearchState::reset_results),
        }
    }

    pub fn clear(&self) {
        self.inner.debouncer.cancel();
        self.inner.generation.advance();
        self.inner.state.update(|s| *s = ListSearchState::default());
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
            return;
        };

        debug!("[ListSearch] searching '{}'", term);
        let result = self
            .inner
            .service
            .search_lists(&term, 1, self.inner.limit)
            .await;
        self.apply(result, &term, generation);
    }

    fn apply(
        &self,
        result: ServiceResult<PaginatedResponse<ListWithOwner>>,
        term: &str,
        generation: u64,
    ) {
        let applied = self.inner.state.update_if(|s| {
            if !self.inner.generation.is_current(generation) {
                return false;
            }
            s.loading = false;
            s.has_searched = true;
            match result {
                Ok(page) => {
                    s.total = page.total;
                    s.lists = page.items;
                }
                Err(err) => {
                    error!("[ListSearch] search for '{}' failed: {}", term, err);
                    s.error = Some(messages::LISTS_FAILED.to_string());
                    s.lists.clear();
                    s.total = 0;
                }
            }
            true
        });
        if !applied {
            debug!("[ListSearch] dropped stale response for '{}'", term);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::fixtures::public_list;
    use crate::infra::testing::stubs::StubListsService;

    #[tokio::test(start_paused = true)]
    async fn searches_with_configured_limit() {
        let service = StubListsService::new();
        service.insert_public(public_list("Clásicos de terror", "ana"));
        service.insert_public(public_list("Terror japonés", "kenji"));
        let store = ListSearchStore::with_timing(
            Arc::new(service.clone()),
            Duration::from_millis(1500),
            2,
            20,
        );

        store.set_query("terror");
        store.search_now().await;

        let state = store.state();
        assert_eq!(state.lists.len(), 2);
        assert_eq!(state.total, 2);
        assert_eq!(service.search_calls(), vec![("terror".to_string(), 1, 20)]);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_sets_message() {
        let service = StubListsService::new();
        service.fail_on("search_lists");
        let store = ListSearchStore::with_timing(
            Arc::new(service.clone()),
            Duration::from_millis(1500),
            2,
            20,
        );

        store.set_query("terror");
        store.search_now().await;

        let state = store.state();
        assert_eq!(state.error.as_deref(), Some(messages::LISTS_FAILED));
        assert!(state.has_searched);
        assert!(state.lists.is_empty());
    }
}
