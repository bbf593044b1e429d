//! One list with its items.
//!
//! `items_count` on the shown list is adjusted locally after each
//! successful add or remove instead of being re-fetched; `load` and
//! `refresh` restore the server's value.

use log::{error, info, warn};
use reelist_model::{
    AddListItemDto, List, ListId, ListItem, ListItemId, UpdateListDto,
    UpdateListItemDto,
};
use std::sync::Arc;
use tokio::sync::watch;

use crate::common::{LoadPhase, StateCell};
use crate::infra::constants::messages::details as messages;
use crate::infra::services::ListsService;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDetailsState {
    pub list: Option<List>,
    pub items: Vec<ListItem>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    /// The list was deleted through this store
    pub deleted: bool,
}

impl ListDetailsState {
    pub fn phase(&self) -> LoadPhase {
        LoadPhase::from_flags(
            self.loading,
            self.refreshing,
            self.error.is_some(),
            self.list.is_some(),
        )
    }

    pub fn items_count(&self) -> Option<u32> {
        self.list.as_ref().map(|list| list.items_count)
    }
}

#[derive(Debug, Clone)]
pub struct ListDetailsStore {
    service: Arc<dyn ListsService>,
    list_id: ListId,
    state: StateCell<ListDetailsState>,
}

impl ListDetailsStore {
    pub fn new(service: Arc<dyn ListsService>, list_id: ListId) -> Self {
        Self {
            service,
            list_id,
            state: StateCell::default(),
        }
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn state(&self) -> ListDetailsState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListDetailsState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.with(ListDetailsState::phase)
    }

    pub async fn load(&self) {
        self.state.update(|s| s.loading = true);
        self.fetch().await;
        self.state.update(|s| s.loading = false);
    }

    pub async fn refresh(&self) {
        self.state.update(|s| s.refreshing = true);
        self.fetch().await;
        self.state.update(|s| s.refreshing = false);
    }

    /// Metadata and items are requested together; state changes only once
    /// both have answered.
    async fn fetch(&self) {
        let (list, items) = tokio::join!(
            self.service.fetch_list(self.list_id),
            self.service.fetch_list_items(self.list_id),
        );

        match (list, items) {
            (Ok(list), Ok(items)) => self.state.update(|s| {
                s.list = Some(list);
                s.items = items;
                s.error = None;
            }),
            (list, items) => {
                if let Err(err) = list {
                    error!("[ListDetails] Failed to load list {}: {}", self.list_id, err);
                }
                if let Err(err) = items {
                    error!(
                        "[ListDetails] Failed to load items of {}: {}",
                        self.list_id, err
                    );
                }
                self.set_error(messages::LOAD_FAILED);
            }
        }
    }

    /// Rename, change visibility, description or cover
    pub async fn update_list(&self, dto: UpdateListDto) -> bool {
        match self.service.update_list(self.list_id, dto).await {
            Ok(fresh) => {
                self.state.update(|s| match s.list.as_mut() {
                    Some(list) => list.merge_metadata(fresh),
                    None => s.list = Some(fresh),
                });
                true
            }
            Err(err) => {
                error!("[ListDetails] Failed to update list {}: {}", self.list_id, err);
                self.set_error(messages::UPDATE_FAILED);
                false
            }
        }
    }

    pub async fn add_item(&self, dto: AddListItemDto) -> Option<ListItem> {
        match self.service.add_list_item(self.list_id, dto).await {
            Ok(item) => {
                info!("[ListDetails] Added {} to {}", item.title, self.list_id);
                self.state.update(|s| {
                    s.items.insert(0, item.clone());
                    if let Some(list) = s.list.as_mut() {
                        list.apply_item_added();
                    }
                });
                Some(item)
            }
            Err(err) => {
                error!("[ListDetails] Failed to add item to {}: {}", self.list_id, err);
                self.set_error(messages::ADD_ITEM_FAILED);
                None
            }
        }
    }

    pub async fn remove_item(&self, item_id: ListItemId) -> bool {
        match self.service.remove_list_item(self.list_id, item_id).await {
            Ok(()) => {
                self.state.update(|s| {
                    let before = s.items.len();
                    s.items.retain(|item| item.id != item_id);
                    if s.items.len() == before {
                        warn!(
                            "[ListDetails] Removed item {} was not loaded locally",
                            item_id
                        );
                    }
                    if let Some(list) = s.list.as_mut() {
                        list.apply_item_removed();
                    }
                });
                true
            }
            Err(err) => {
                error!(
                    "[ListDetails] Failed to remove item {} from {}: {}",
                    item_id, self.list_id, err
                );
                self.set_error(messages::REMOVE_ITEM_FAILED);
                false
            }
        }
    }

    /// Edit an item's notes; the server's copy replaces the local one
    pub async fn update_item(
        &self,
        item_id: ListItemId,
        dto: UpdateListItemDto,
    ) -> bool {
        match self
            .service
            .update_list_item(self.list_id, item_id, dto)
            .await
        {
            Ok(updated) => {
                self.state.update(|s| {
                    if let Some(slot) =
                        s.items.iter_mut().find(|item| item.id == item_id)
                    {
                        *slot = updated;
                    }
                });
                true
            }
            Err(err) => {
                error!(
                    "[ListDetails] Failed to update item {} in {}: {}",
                    item_id, self.list_id, err
                );
                self.set_error(messages::UPDATE_ITEM_FAILED);
                false
            }
        }
    }

    pub async fn delete_list(&self) -> bool {
        match self.service.delete_list(self.list_id).await {
            Ok(()) => {
                info!("[ListDetails] Deleted list {}", self.list_id);
                self.state.update(|s| s.deleted = true);
                true
            }
            Err(err) => {
                error!("[ListDetails] Failed to delete list {}: {}", self.list_id, err);
                self.set_error(messages::DELETE_FAILED);
                false
            }
        }
    }

    pub fn clear_error(&self) {
        self.state.update_if(|s| s.error.take().is_some());
    }

    fn set_error(&self, message: &str) {
        self.state.update(|s| s.error = Some(message.to_string()));
    }
}
