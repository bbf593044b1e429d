//! Core data model definitions shared across Reelist crates.
#![allow(missing_docs)]

pub mod dto;
pub mod error;
pub mod ids;
pub mod image;
pub mod list;
pub mod media_type;
pub mod movie;
pub mod page;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use dto::{
    AddListItemDto, CreateListDto, UpdateListDto, UpdateListItemDto,
};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ListId, ListItemId, UserId};
pub use image::{
    BackdropSize, ImageSize, ImageUrlBuilder, LogoSize, PosterSize,
    ProfileSize, TMDB_IMAGE_BASE_URL, backdrop_url, logo_url, poster_url,
    profile_url,
};
pub use list::{List, ListCover, ListItem, ListWithOwner};
pub use media_type::MediaType;
pub use movie::{Genre, Movie, MovieDetails, MovieSearchPage};
pub use page::PaginatedResponse;
