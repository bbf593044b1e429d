//! Lists overview: the signed-in user's lists, or another user's public ones.

use log::{error, info};
use reelist_model::{CreateListDto, List, ListId, UserId};
use std::sync::Arc;
use tokio::sync::watch;

use crate::common::{LoadPhase, StateCell};
use crate::infra::constants::messages::lists as messages;
use crate::infra::services::{ListsService, ServiceResult};

/// Whose lists a [`UserListsStore`] shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListsOwner {
    #[default]
    Me,
    User(UserId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListsState {
    pub lists: Vec<List>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    /// At least one load succeeded
    pub loaded: bool,
}

impl UserListsState {
    pub fn phase(&self) -> LoadPhase {
        LoadPhase::from_flags(
            self.loading,
            self.refreshing,
            self.error.is_some(),
            self.loaded,
        )
    }
}

#[derive(Debug, Clone)]
pub struct UserListsStore {
    service: Arc<dyn ListsService>,
    owner: ListsOwner,
    state: StateCell<UserListsState>,
}

#[derive(Clone, Copy)]
enum Trigger {
    Load,
    Refresh,
}

impl UserListsStore {
    /// Store over the signed-in user's lists
    pub fn new(service: Arc<dyn ListsService>) -> Self {
        Self::for_owner(service, ListsOwner::Me)
    }

    pub fn for_owner(service: Arc<dyn ListsService>, owner: ListsOwner) -> Self {
        Self {
            service,
            owner,
            state: StateCell::default(),
        }
    }

    pub fn owner(&self) -> ListsOwner {
        self.owner
    }

    pub fn state(&self) -> UserListsState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<UserListsState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.with(UserListsState::phase)
    }

    /// Initial load; raises `loading`
    pub async fn load(&self) {
        self.fetch(Trigger::Load).await;
    }

    /// Pull-to-refresh; raises `refreshing` and keeps the current lists
    pub async fn refresh(&self) {
        self.fetch(Trigger::Refresh).await;
    }

    async fn fetch(&self, trigger: Trigger) {
        self.state.update(|s| match trigger {
            Trigger::Load => s.loading = true,
            Trigger::Refresh => s.refreshing = true,
        });

        let result = self.fetch_lists().await;

        self.state.update(|s| {
            match trigger {
                Trigger::Load => s.loading = false,
                Trigger::Refresh => s.refreshing = false,
            }
            match result {
                Ok(lists) => {
                    s.lists = lists;
                    s.loaded = true;
                    s.error = None;
                }
                Err(err) => {
                    error!("[UserLists] Failed to load lists: {}", err);
                    s.error = Some(messages::LOAD_FAILED.to_string());
                }
            }
        });
    }

    async fn fetch_lists(&self) -> ServiceResult<Vec<List>> {
        match self.owner {
            ListsOwner::Me => self.service.fetch_my_lists().await,
            ListsOwner::User(user_id) => {
                self.service.fetch_user_lists(user_id).await
            }
        }
    }

    /// Create a list and put it first. `None` on failure.
    pub async fn create_list(&self, dto: CreateListDto) -> Option<List> {
        match self.service.create_list(dto).await {
            Ok(list) => {
                info!("[UserLists] Created list {}", list.id);
                self.state.update(|s| s.lists.insert(0, list.clone()));
                Some(list)
            }
            Err(err) => {
                error!("[UserLists] Failed to create list: {}", err);
                self.state
                    .update(|s| s.error = Some(messages::CREATE_FAILED.to_string()));
                None
            }
        }
    }

    pub async fn delete_list(&self, id: ListId) -> bool {
        match self.service.delete_list(id).await {
            Ok(()) => {
                info!("[UserLists] Deleted list {}", id);
                self.state.update(|s| s.lists.retain(|list| list.id != id));
                true
            }
            Err(err) => {
                error!("[UserLists] Failed to delete list {}: {}", id, err);
                self.state
                    .update(|s| s.error = Some(messages::DELETE_FAILED.to_string()));
                false
            }
        }
    }

    pub fn clear_error(&self) {
        self.state.update_if(|s| s.error.take().is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::fixtures::list_titled;
    use crate::infra::testing::stubs::StubListsService;

    #[tokio::test]
    async fn load_populates_and_marks_ready() {
        let service = StubListsService::new();
        service.insert_mine(list_titled("Favoritas"));
        let store = UserListsStore::new(Arc::new(service));

        assert_eq!(store.phase(), LoadPhase::Idle);
        store.load().await;

        let state = store.state();
        assert_eq!(state.lists.len(), 1);
        assert!(!state.loading);
        assert_eq!(store.phase(), LoadPhase::Ready);
    }

    #[tokio::test]
    async fn failed_load_sets_message_and_success_clears_it() {
        let service = StubListsService::new();
        service.fail_on("fetch_my_lists");
        let store = UserListsStore::new(Arc::new(service.clone()));

        store.load().await;
        assert_eq!(store.state().error.as_deref(), Some(messages::LOAD_FAILED));
        assert_eq!(store.phase(), LoadPhase::Failed);

        service.clear_failures();
        store.refresh().await;
        assert_eq!(store.state().error, None);
    }

    #[tokio::test]
    async fn other_users_lists_come_from_their_endpoint() {
        let service = StubListsService::new();
        let theirs = service.insert_public(
            crate::infra::testing::fixtures::public_list("Cine coreano", "min"),
        );
        let store = UserListsStore::for_owner(
            Arc::new(service.clone()),
            ListsOwner::User(theirs.list.owner_id),
        );

        store.load().await;

        assert_eq!(store.state().lists, vec![theirs.list.clone()]);
        assert!(service.calls().contains(&"fetch_user_lists".to_string()));
    }

    #[tokio::test]
    async fn delete_failure_keeps_list() {
        let service = StubListsService::new();
        let list = service.insert_mine(list_titled("Pendientes"));
        let store = UserListsStore::new(Arc::new(service.clone()));
        store.load().await;

        service.fail_on("delete_list");
        assert!(!store.delete_list(list.id).await);
        assert_eq!(store.state().lists.len(), 1);
        assert_eq!(
            store.state().error.as_deref(),
            Some(messages::DELETE_FAILED)
        );

        store.clear_error();
        assert_eq!(store.state().error, None);
    }
}
