use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use reelist_model::{
    AddListItemDto, CreateListDto, List, ListId, ListItem, ListItemId,
    ListWithOwner, PaginatedResponse, UpdateListDto, UpdateListItemDto, UserId,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::infra::services::{ListsService, ServiceError, ServiceResult};

/// In-memory lists backend.
///
/// Lists created through the trait belong to the nil user. Every trait call
/// is recorded by name; `fail_on` makes a named operation return
/// `RequestFailed` until `clear_failures`.
#[derive(Debug, Clone, Default)]
pub struct StubListsService {
    inner: Arc<RwLock<InnerListsState>>,
}

#[derive(Debug, Default)]
struct InnerListsState {
    mine: Vec<List>,
    public: Vec<ListWithOwner>,
    items: HashMap<ListId, Vec<ListItem>>,
    failures: HashSet<String>,
    calls: Vec<String>,
    search_calls: Vec<(String, u32, u32)>,
    search_latency: HashMap<String, Duration>,
    latency: HashMap<String, Duration>,
}

impl InnerListsState {
    fn enter(&mut self, operation: &str) -> ServiceResult<()> {
        self.calls.push(operation.to_string());
        if self.failures.contains(operation) {
            return Err(ServiceError::RequestFailed(format!(
                "injected failure: {operation}"
            )));
        }
        Ok(())
    }

    fn list_mut(&mut self, id: ListId) -> ServiceResult<&mut List> {
        if let Some(index) = self.mine.iter().position(|list| list.id == id) {
            return Ok(&mut self.mine[index]);
        }
        self.public
            .iter_mut()
            .map(|entry| &mut entry.list)
            .find(|list| list.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("list {id}")))
    }
}

impl StubListsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a list owned by the signed-in user
    pub fn insert_mine(&self, list: List) -> List {
        self.inner.write().mine.push(list.clone());
        list
    }

    /// Seed a public list of another user
    pub fn insert_public(&self, entry: ListWithOwner) -> ListWithOwner {
        self.inner.write().public.push(entry.clone());
        entry
    }

    /// Seed an item; the stored list's count follows
    pub fn insert_item(&self, list_id: ListId, item: ListItem) -> ListItem {
        let mut guard = self.inner.write();
        guard.items.entry(list_id).or_default().push(item.clone());
        if let Ok(list) = guard.list_mut(list_id) {
            list.apply_item_added();
        }
        item
    }

    /// Overwrite the stored count, simulating drift on the server side
    pub fn set_stored_count(&self, list_id: ListId, count: u32) {
        if let Ok(list) = self.inner.write().list_mut(list_id) {
            list.items_count = count;
        }
    }

    /// Delay every call of `operation` before it touches the data
    pub fn set_latency(&self, operation: &str, latency: Duration) {
        self.inner
            .write()
            .latency
            .insert(operation.to_string(), latency);
    }

    async fn delay(&self, operation: &str) {
        let latency = self.inner.read().latency.get(operation).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    pub fn set_search_latency(&self, query: &str, latency: Duration) {
        self.inner
            .write()
            .search_latency
            .insert(query.to_string(), latency);
    }

    pub fn fail_on(&self, operation: &str) {
        self.inner.write().failures.insert(operation.to_string());
    }

    pub fn clear_failures(&self) {
        self.inner.write().failures.clear();
    }

    pub fn mine(&self) -> Vec<List> {
        self.inner.read().mine.clone()
    }

    pub fn items_of(&self, list_id: ListId) -> Vec<ListItem> {
        self.inner
            .read()
            .items
            .get(&list_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Names of every trait operation invoked, in order
    pub fn calls(&self) -> Vec<String> {
        self.inner.read().calls.clone()
    }

    /// `(query, page, limit)` of every list search
    pub fn search_calls(&self) -> Vec<(String, u32, u32)> {
        self.inner.read().search_calls.clone()
    }
}

#[async_trait]
impl ListsService for StubListsService {
    async fn create_list(&self, dto: CreateListDto) -> ServiceResult<List> {
        self.delay("create_list").await;
        let mut guard = self.inner.write();
        guard.enter("create_list")?;
        let now = Utc::now();
        let list = List {
            id: ListId::new(),
            owner_id: UserId(Uuid::nil()),
            title: dto.title,
            description: dto.description,
            is_public: dto.is_public,
            cover: None,
            items_count: 0,
            created_at: now,
            updated_at: now,
        };
        guard.mine.insert(0, list.clone());
        Ok(list)
    }

    async fn fetch_my_lists(&self) -> ServiceResult<Vec<List>> {
        self.delay("fetch_my_lists").await;
        let mut guard = self.inner.write();
        guard.enter("fetch_my_lists")?;
        Ok(guard.mine.clone())
    }

    async fn fetch_user_lists(&self, user_id: UserId) -> ServiceResult<Vec<List>> {
        self.delay("fetch_user_lists").await;
        let mut guard = self.inner.write();
        guard.enter("fetch_user_lists")?;
        Ok(guard
            .public
            .iter()
            .map(|entry| &entry.list)
            .chain(guard.mine.iter().filter(|list| list.is_public))
            .filter(|list| list.owner_id == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_list(&self, id: ListId) -> ServiceResult<List> {
        self.delay("fetch_list").await;
        let mut guard = self.inner.write();
        guard.enter("fetch_list")?;
        guard.list_mut(id).map(|list| list.clone())
    }

    async fn update_list(
        &self,
        id: ListId,
        dto: UpdateListDto,
    ) -> ServiceResult<List> {
        self.delay("update_list").await;
        let mut guard = self.inner.write();
        guard.enter("update_list")?;
        let list = guard.list_mut(id)?;
        if let Some(title) = dto.title {
            list.title = title;
        }
        if let Some(description) = dto.description {
            list.description = Some(description);
        }
        if let Some(is_public) = dto.is_public {
            list.is_public = is_public;
        }
        if let Some(cover) = dto.cover {
            list.cover = Some(cover);
        }
        list.updated_at = Utc::now();
        Ok(list.clone())
    }

    async fn delete_list(&self, id: ListId) -> ServiceResult<()> {
        self.delay("delete_list").await;
        let mut guard = self.inner.write();
        guard.enter("delete_list")?;
        let before = guard.mine.len();
        guard.mine.retain(|list| list.id != id);
        if guard.mine.len() == before {
            return Err(ServiceError::NotFound(format!("list {id}")));
        }
        guard.items.remove(&id);
        Ok(())
    }

    async fn fetch_list_items(&self, id: ListId) -> ServiceResult<Vec<ListItem>> {
        self.delay("fetch_list_items").await;
        let mut guard = self.inner.write();
        guard.enter("fetch_list_items")?;
        guard.list_mut(id)?;
        Ok(guard.items.get(&id).cloned().unwrap_or_default())
    }

    async fn add_list_item(
        &self,
        id: ListId,
        dto: AddListItemDto,
    ) -> ServiceResult<ListItem> {
        self.delay("add_list_item").await;
        let mut guard = self.inner.write();
        guard.enter("add_list_item")?;
        guard.list_mut(id)?.apply_item_added();
        let item = ListItem {
            id: ListItemId::new(),
            tmdb_id: dto.tmdb_id,
            media_type: dto.media_type,
            title: dto.title,
            poster_path: dto.poster_path,
            notes: dto.notes,
            added_at: Utc::now(),
        };
        guard.items.entry(id).or_default().insert(0, item.clone());
        Ok(item)
    }

    async fn update_list_item(
        &self,
        id: ListId,
        item_id: ListItemId,
        dto: UpdateListItemDto,
    ) -> ServiceResult<ListItem> {
        self.delay("update_list_item").await;
        let mut guard = self.inner.write();
        guard.enter("update_list_item")?;
        let item = guard
            .items
            .get_mut(&id)
            .and_then(|items| items.iter_mut().find(|item| item.id == item_id))
            .ok_or_else(|| ServiceError::NotFound(format!("item {item_id}")))?;
        item.notes = dto.notes;
        Ok(item.clone())
    }

    async fn remove_list_item(
        &self,
        id: ListId,
        item_id: ListItemId,
    ) -> ServiceResult<()> {
        self.delay("remove_list_item").await;
        let mut guard = self.inner.write();
        guard.enter("remove_list_item")?;
        let items = guard
            .items
            .get_mut(&id)
            .ok_or_else(|| ServiceError::NotFound(format!("list {id}")))?;
        let before = items.len();
        items.retain(|item| item.id != item_id);
        if items.len() == before {
            return Err(ServiceError::NotFound(format!("item {item_id}")));
        }
        guard.list_mut(id)?.apply_item_removed();
        Ok(())
    }

    async fn search_lists(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PaginatedResponse<ListWithOwner>> {
        let latency = {
            let mut guard = self.inner.write();
            guard.search_calls.push((query.to_string(), page, limit));
            guard.enter("search_lists")?;
            guard.search_latency.get(query).copied()
        };
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let needle = query.to_lowercase();
        let guard = self.inner.read();
        let matches: Vec<ListWithOwner> = guard
            .public
            .iter()
            .filter(|entry| entry.list.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let total = matches.len() as u64;
        let skip = (page.saturating_sub(1) as usize) * limit as usize;
        Ok(PaginatedResponse {
            items: matches.into_iter().skip(skip).take(limit as usize).collect(),
            total,
            page,
            limit,
        })
    }
}
