//! Request bodies for the list endpoints.

use serde::{Deserialize, Serialize};

use crate::list::ListCover;
use crate::media_type::MediaType;
use crate::movie::Movie;

/// Body of `POST /lists`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListDto {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

impl CreateListDto {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_public: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }
}

/// Body of `PUT /lists/:id`. Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ListCover>,
}

impl UpdateListDto {
    pub fn rename(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn visibility(is_public: bool) -> Self {
        Self {
            is_public: Some(is_public),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.is_public.is_none()
            && self.cover.is_none()
    }
}

/// Body of `POST /lists/:id/items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddListItemDto {
    pub tmdb_id: u64,
    pub media_type: MediaType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Movie> for AddListItemDto {
    fn from(movie: &Movie) -> Self {
        Self {
            tmdb_id: movie.id,
            media_type: MediaType::Movie,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            notes: None,
        }
    }
}

/// Body of `PUT /lists/:id/items/:itemId`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListItemDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_dto_omits_absent_fields() {
        let dto = UpdateListDto::visibility(true);
        let json = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(json, serde_json::json!({ "isPublic": true }));
        assert!(!dto.is_empty());
        assert!(UpdateListDto::default().is_empty());
    }

    #[test]
    fn movie_translates_into_add_item_body() {
        let movie = Movie {
            id: 268,
            title: "Batman".into(),
            overview: None,
            poster_path: Some("/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg".into()),
            backdrop_path: None,
            release_date: None,
            vote_average: Some(7.2),
        };

        let dto = AddListItemDto::from(&movie);
        let json = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "tmdbId": 268,
                "mediaType": "movie",
                "title": "Batman",
                "posterPath": "/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg"
            })
        );
    }
}
