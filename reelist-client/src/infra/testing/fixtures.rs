//! Builders for model values used across tests.

use chrono::Utc;
use reelist_model::{
    List, ListId, ListItem, ListItemId, ListWithOwner, MediaType, Movie,
    MovieSearchPage, UserId,
};
use uuid::Uuid;

pub fn list_titled(title: &str) -> List {
    let now = Utc::now();
    List {
        id: ListId::new(),
        owner_id: UserId(Uuid::nil()),
        title: title.to_string(),
        description: None,
        is_public: false,
        cover: None,
        items_count: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn public_list(title: &str, owner_name: &str) -> ListWithOwner {
    ListWithOwner {
        list: List {
            owner_id: UserId(Uuid::now_v7()),
            is_public: true,
            ..list_titled(title)
        },
        owner_name: owner_name.to_string(),
    }
}

pub fn item(tmdb_id: u64, title: &str) -> ListItem {
    ListItem {
        id: ListItemId::new(),
        tmdb_id,
        media_type: MediaType::Movie,
        title: title.to_string(),
        poster_path: Some(format!("/{tmdb_id}.jpg")),
        notes: None,
        added_at: Utc::now(),
    }
}

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: None,
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        release_date: None,
        vote_average: None,
    }
}

pub fn movie_page(
    page: u32,
    total_pages: u32,
    results: Vec<Movie>,
) -> MovieSearchPage {
    MovieSearchPage {
        page,
        total_results: results.len() as u32,
        results,
        total_pages,
    }
}
