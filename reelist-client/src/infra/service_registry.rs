//! Service registry handed to front-ends.
//!
//! Owns the service handles and hands out stores wired to them. Nothing
//! here is global: each front-end builds one registry and passes it down.

use reelist_config::{ClientConfig, SearchConfig};
use reelist_model::{ImageUrlBuilder, ListId, UserId};
use std::sync::Arc;

use crate::domains::lists::{
    AddToListStore, ListDetailsStore, ListsOwner, UserListsStore,
};
use crate::domains::search::{ListSearchStore, MovieSearchStore};
use crate::infra::api_client::ApiClient;
use crate::infra::services::{
    HttpListsService, ListsService, MovieCatalog, TmdbCatalog,
};
use crate::infra::session::AuthSession;

#[derive(Clone)]
pub struct ServiceRegistry {
    pub lists: Arc<dyn ListsService>,
    pub catalog: Arc<dyn MovieCatalog>,
    search: SearchConfig,
    images: ImageUrlBuilder,
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("lists", &self.lists)
            .field("catalog", &self.catalog)
            .field("search", &self.search)
            .finish()
    }
}

impl ServiceRegistry {
    /// Wire the HTTP services from a loaded configuration
    pub fn from_config(
        config: &ClientConfig,
        session: AuthSession,
    ) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api, session)?;
        let catalog =
            TmdbCatalog::new(&config.tmdb, config.api.request_timeout())?;
        Ok(Self {
            lists: Arc::new(HttpListsService::new(client)),
            catalog: Arc::new(catalog),
            search: config.search.clone(),
            images: ImageUrlBuilder::new(&config.tmdb.image_base_url),
        })
    }

    /// Registry over caller-provided services
    pub fn with_services(
        lists: Arc<dyn ListsService>,
        catalog: Arc<dyn MovieCatalog>,
        search: SearchConfig,
    ) -> Self {
        Self {
            lists,
            catalog,
            search,
            images: ImageUrlBuilder::default(),
        }
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    pub fn user_lists(&self) -> UserListsStore {
        UserListsStore::new(Arc::clone(&self.lists))
    }

    pub fn lists_of(&self, user_id: UserId) -> UserListsStore {
        UserListsStore::for_owner(
            Arc::clone(&self.lists),
            ListsOwner::User(user_id),
        )
    }

    pub fn list_details(&self, list_id: ListId) -> ListDetailsStore {
        ListDetailsStore::new(Arc::clone(&self.lists), list_id)
    }

    pub fn add_to_list(&self) -> AddToListStore {
        AddToListStore::new(Arc::clone(&self.lists))
    }

    pub fn movie_search(&self) -> MovieSearchStore {
        MovieSearchStore::new(Arc::clone(&self.catalog), &self.search)
    }

    pub fn list_search(&self) -> ListSearchStore {
        ListSearchStore::new(Arc::clone(&self.lists), &self.search)
    }
}
