//! "Add to list" picker shown from a movie screen.

use log::{error, info};
use reelist_model::{AddListItemDto, CreateListDto, List, ListId, Movie};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::watch;

use crate::common::{LoadPhase, StateCell};
use crate::infra::constants::messages::add_to_list as messages;
use crate::infra::services::ListsService;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddToListState {
    pub lists: Vec<List>,
    pub loading: bool,
    pub error: Option<String>,
    /// Lists with an add request in flight
    pub adding_to: HashSet<ListId>,
    pub loaded: bool,
}

impl AddToListState {
    pub fn is_adding(&self, list_id: ListId) -> bool {
        self.adding_to.contains(&list_id)
    }

    pub fn phase(&self) -> LoadPhase {
        LoadPhase::from_flags(
            self.loading,
            false,
            self.error.is_some(),
            self.loaded,
        )
    }
}

#[derive(Debug, Clone)]
pub struct AddToListStore {
    service: Arc<dyn ListsService>,
    state: StateCell<AddToListState>,
}

impl AddToListStore {
    pub fn new(service: Arc<dyn ListsService>) -> Self {
        Self {
            service,
            state: StateCell::default(),
        }
    }

    pub fn state(&self) -> AddToListState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<AddToListState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.with(AddToListState::phase)
    }

    pub async fn load_lists(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.service.fetch_my_lists().await;

        self.state.update(|s| {
            s.loading = false;
            match result {
                Ok(lists) => {
                    s.lists = lists;
                    s.loaded = true;
                }
                Err(err) => {
                    error!("[AddToList] Failed to load lists: {}", err);
                    s.error = Some(messages::LOAD_FAILED.to_string());
                }
            }
        });
    }

    /// Add `movie` to `list_id`. Adding the same movie twice is not
    /// prevented here.
    pub async fn add_movie(&self, list_id: ListId, movie: &Movie) -> bool {
        self.state.update(|s| {
            s.adding_to.insert(list_id);
            s.error = None;
        });

        let dto = AddListItemDto::from(movie);
        let result = self.service.add_list_item(list_id, dto).await;

        let added = result.is_ok();
        self.state.update(|s| {
            s.adding_to.remove(&list_id);
            match result {
                Ok(_) => {
                    if let Some(list) =
                        s.lists.iter_mut().find(|list| list.id == list_id)
                    {
                        list.apply_item_added();
                    }
                }
                Err(err) => {
                    error!(
                        "[AddToList] Failed to add {} to {}: {}",
                        movie.id, list_id, err
                    );
                    s.error = Some(messages::ADD_FAILED.to_string());
                }
            }
        });
        if added {
            info!("[AddToList] Added {} to {}", movie.title, list_id);
        }
        added
    }

    /// Create a list, put it first, then add `movie` to it.
    ///
    /// Returns the created list even when the follow-up add fails; that
    /// failure is reported through `error`.
    pub async fn create_list_and_add(
        &self,
        dto: CreateListDto,
        movie: &Movie,
    ) -> Option<List> {
        let created = match self.service.create_list(dto).await {
            Ok(list) => list,
            Err(err) => {
                error!("[AddToList] Failed to create list: {}", err);
                self.state
                    .update(|s| s.error = Some(messages::CREATE_FAILED.to_string()));
                return None;
            }
        };
        let list_id = created.id;
        self.state.update(|s| s.lists.insert(0, created.clone()));

        self.add_movie(list_id, movie).await;

        self.state
            .with(|s| s.lists.iter().find(|list| list.id == list_id).cloned())
            .or(Some(created))
    }

    pub fn clear_error(&self) {
        self.state.update_if(|s| s.error.take().is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::fixtures::{list_titled, movie};
    use crate::infra::testing::stubs::StubListsService;

    #[tokio::test]
    async fn add_failure_reports_and_clears_adding_flag() {
        let service = StubListsService::new();
        let list = service.insert_mine(list_titled("Ver luego"));
        let store = AddToListStore::new(Arc::new(service.clone()));
        store.load_lists().await;

        service.fail_on("add_list_item");
        assert!(!store.add_movie(list.id, &movie(603, "The Matrix")).await);

        let state = store.state();
        assert!(state.adding_to.is_empty());
        assert_eq!(state.error.as_deref(), Some(messages::ADD_FAILED));
        assert_eq!(state.lists[0].items_count, 0);
    }

    #[tokio::test]
    async fn create_and_add_prepends_counted_list() {
        let service = StubListsService::new();
        service.insert_mine(list_titled("Antigua"));
        let store = AddToListStore::new(Arc::new(service.clone()));
        store.load_lists().await;

        let created = store
            .create_list_and_add(CreateListDto::new("Nueva"), &movie(603, "The Matrix"))
            .await
            .expect("created");

        let state = store.state();
        assert_eq!(state.lists[0].id, created.id);
        assert_eq!(state.lists[0].items_count, 1);
        assert_eq!(created.items_count, 1);
        assert_eq!(service.items_of(created.id).len(), 1);
        assert_eq!(service.items_of(created.id)[0].tmdb_id, 603);
    }

    #[tokio::test]
    async fn create_failure_returns_none() {
        let service = StubListsService::new();
        service.fail_on("create_list");
        let store = AddToListStore::new(Arc::new(service.clone()));

        let created = store
            .create_list_and_add(CreateListDto::new("Nueva"), &movie(1, "Uno"))
            .await;

        assert!(created.is_none());
        assert_eq!(store.state().error.as_deref(), Some(messages::CREATE_FAILED));
        assert!(!service.calls().contains(&"add_list_item".to_string()));
    }
}
