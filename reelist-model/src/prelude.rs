//! Client focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in reelist-client or other presentation layers.

pub use super::dto::{
    AddListItemDto, CreateListDto, UpdateListDto, UpdateListItemDto,
};
pub use super::ids::{ListId, ListItemId, UserId};
pub use super::image::{
    BackdropSize, ImageSize, ImageUrlBuilder, LogoSize, PosterSize,
    ProfileSize,
};
pub use super::list::{List, ListCover, ListItem, ListWithOwner};
pub use super::media_type::MediaType;
pub use super::movie::{Genre, Movie, MovieDetails, MovieSearchPage};
pub use super::page::PaginatedResponse;
