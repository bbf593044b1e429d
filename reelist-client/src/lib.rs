//! Reelist client library
//!
//! State stores and services behind the Reelist screens: the user's lists,
//! a list's detail view, the add-to-list picker, and the debounced movie and
//! public-list searches. Front-ends subscribe to a store's `watch` channel
//! and re-render on change; all I/O goes through the injected
//! [`ListsService`](infra::services::ListsService) and
//! [`MovieCatalog`](infra::services::MovieCatalog).
//!
//! Notes
//! - Stores never hold ambient state: build a
//!   [`ServiceRegistry`](infra::ServiceRegistry) from a loaded
//!   [`ClientConfig`](reelist_config::ClientConfig) and an
//!   [`AuthSession`](infra::AuthSession), then ask it for stores.
//! - Failures surface as one fixed, user-facing message per operation on
//!   the store's `error` field; the cause is logged through `log`.

pub mod common;
pub mod domains;
pub mod infra;

pub use common::LoadPhase;
pub use domains::lists::{
    AddToListStore, ListDetailsStore, ListsOwner, UserListsStore,
};
pub use domains::search::{ListSearchStore, MovieSearchStore};
pub use infra::{AuthSession, ServiceRegistry};
