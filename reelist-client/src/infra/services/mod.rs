//! Service traits consumed by the stores, with their HTTP implementations.
//!
//! Stores only ever hold `Arc<dyn ListsService>` / `Arc<dyn MovieCatalog>`,
//! so tests swap in the stubs from [`crate::infra::testing`].

pub mod catalog;
pub mod error;
pub mod lists;

pub use catalog::{MovieCatalog, TmdbCatalog};
pub use error::{ServiceError, ServiceResult};
pub use lists::{HttpListsService, ListsService};
