//! Typed façade over the list REST endpoints.

use async_trait::async_trait;
use reelist_model::{
    AddListItemDto, CreateListDto, List, ListId, ListItem, ListItemId,
    ListWithOwner, PaginatedResponse, UpdateListDto, UpdateListItemDto, UserId,
};
use serde::Serialize;
use std::fmt::Debug;

use crate::infra::api_client::ApiClient;
use crate::infra::constants::routes::{lists as routes, utils};
use crate::infra::services::{ServiceError, ServiceResult};

/// List CRUD and public list search
#[async_trait]
pub trait ListsService: Send + Sync + Debug {
    async fn create_list(&self, dto: CreateListDto) -> ServiceResult<List>;

    /// Lists owned by the signed-in user
    async fn fetch_my_lists(&self) -> ServiceResult<Vec<List>>;

    /// Lists owned by another user (public ones only, server-side)
    async fn fetch_user_lists(&self, user_id: UserId) -> ServiceResult<Vec<List>>;

    async fn fetch_list(&self, id: ListId) -> ServiceResult<List>;

    async fn update_list(
        &self,
        id: ListId,
        dto: UpdateListDto,
    ) -> ServiceResult<List>;

    async fn delete_list(&self, id: ListId) -> ServiceResult<()>;

    async fn fetch_list_items(&self, id: ListId) -> ServiceResult<Vec<ListItem>>;

    async fn add_list_item(
        &self,
        id: ListId,
        dto: AddListItemDto,
    ) -> ServiceResult<ListItem>;

    async fn update_list_item(
        &self,
        id: ListId,
        item_id: ListItemId,
        dto: UpdateListItemDto,
    ) -> ServiceResult<ListItem>;

    async fn remove_list_item(
        &self,
        id: ListId,
        item_id: ListItemId,
    ) -> ServiceResult<()>;

    /// Search public lists by title
    async fn search_lists(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PaginatedResponse<ListWithOwner>>;
}

#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    page: u32,
    limit: u32,
}

/// [`ListsService`] backed by the HTTP [`ApiClient`]
#[derive(Debug, Clone)]
pub struct HttpListsService {
    client: ApiClient,
}

impl HttpListsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn list_path(id: ListId) -> String {
        utils::replace_param(routes::ITEM, "{id}", id.to_string())
    }

    fn items_path(id: ListId) -> String {
        utils::replace_param(routes::ITEMS, "{id}", id.to_string())
    }

    fn item_entry_path(id: ListId, item_id: ListItemId) -> String {
        utils::replace_params(
            routes::ITEM_ENTRY,
            &[("{id}", &id.to_string()), ("{item_id}", &item_id.to_string())],
        )
    }
}

#[async_trait]
impl ListsService for HttpListsService {
    async fn create_list(&self, dto: CreateListDto) -> ServiceResult<List> {
        self.client
            .post(routes::COLLECTION, &dto)
            .await
            .map_err(ServiceError::from)
    }

    async fn fetch_my_lists(&self) -> ServiceResult<Vec<List>> {
        self.client
            .get(routes::MY_LISTS)
            .await
            .map_err(ServiceError::from)
    }

    async fn fetch_user_lists(&self, user_id: UserId) -> ServiceResult<Vec<List>> {
        let path =
            utils::replace_param(routes::BY_USER, "{user_id}", user_id.to_string());
        self.client.get(&path).await.map_err(ServiceError::from)
    }

    async fn fetch_list(&self, id: ListId) -> ServiceResult<List> {
        self.client
            .get(&Self::list_path(id))
            .await
            .map_err(ServiceError::from)
    }

    async fn update_list(
        &self,
        id: ListId,
        dto: UpdateListDto,
    ) -> ServiceResult<List> {
        self.client
            .put(&Self::list_path(id), &dto)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_list(&self, id: ListId) -> ServiceResult<()> {
        self.client
            .delete(&Self::list_path(id))
            .await
            .map_err(ServiceError::from)
    }

    async fn fetch_list_items(&self, id: ListId) -> ServiceResult<Vec<ListItem>> {
        self.client
            .get(&Self::items_path(id))
            .await
            .map_err(ServiceError::from)
    }

    async fn add_list_item(
        &self,
        id: ListId,
        dto: AddListItemDto,
    ) -> ServiceResult<ListItem> {
        self.client
            .post(&Self::items_path(id), &dto)
            .await
            .map_err(ServiceError::from)
    }

    async fn update_list_item(
        &self,
        id: ListId,
        item_id: ListItemId,
        dto: UpdateListItemDto,
    ) -> ServiceResult<ListItem> {
        self.client
            .put(&Self::item_entry_path(id, item_id), &dto)
            .await
            .map_err(ServiceError::from)
    }

    async fn remove_list_item(
        &self,
        id: ListId,
        item_id: ListItemId,
    ) -> ServiceResult<()> {
        self.client
            .delete(&Self::item_entry_path(id, item_id))
            .await
            .map_err(ServiceError::from)
    }

    async fn search_lists(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> ServiceResult<PaginatedResponse<ListWithOwner>> {
        let params = SearchQuery {
            q: query,
            page,
            limit,
        };
        self.client
            .get_with_query(routes::SEARCH, &params)
            .await
            .map_err(ServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn item_paths_embed_both_ids() {
        let list = ListId(Uuid::nil());
        let item = ListItemId(Uuid::from_u128(1));
        assert_eq!(
            HttpListsService::item_entry_path(list, item),
            format!("/lists/{}/items/{}", Uuid::nil(), Uuid::from_u128(1))
        );
        assert_eq!(
            HttpListsService::items_path(list),
            format!("/lists/{}/items", Uuid::nil())
        );
    }
}
