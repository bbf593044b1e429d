//! User curated lists and their entries.
//!
//! `items_count` on [`List`] is a derived value. The server owns the real
//! count; clients adjust it locally when an item add/remove succeeds and
//! only get the authoritative number back on the next full fetch. Under
//! concurrent edits from several clients the local value can drift until
//! that reload happens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ListId, ListItemId, UserId};
use crate::media_type::MediaType;

/// Artwork shown for a list, borrowed from one of the catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCover {
    pub tmdb_id: u64,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Overrides the list title on the cover when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub owner_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_public: bool,
    #[serde(default)]
    pub cover: Option<ListCover>,
    #[serde(default)]
    pub items_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl List {
    /// Record a successful item insertion against the derived counter.
    pub fn apply_item_added(&mut self) {
        self.items_count = self.items_count.saturating_add(1);
    }

    /// Record a successful item removal against the derived counter.
    pub fn apply_item_removed(&mut self) {
        self.items_count = self.items_count.saturating_sub(1);
    }

    /// Take server-side metadata from `fresh` while keeping the locally
    /// maintained item counter.
    pub fn merge_metadata(&mut self, fresh: List) {
        let items_count = self.items_count;
        *self = fresh;
        self.items_count = items_count;
    }

    /// Title to render on the cover, preferring the cover override.
    pub fn display_title(&self) -> &str {
        self.cover
            .as_ref()
            .and_then(|cover| cover.custom_title.as_deref())
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.title)
    }
}

/// Entry of a list. Belongs to exactly one list, addressed by the list id
/// in the request path rather than stored on the item itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: ListItemId,
    pub tmdb_id: u64,
    pub media_type: MediaType,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Public search result: a list with its owner's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWithOwner {
    #[serde(flatten)]
    pub list: List,
    pub owner_name: String,
}

impl std::ops::Deref for ListWithOwner {
    type Target = List;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}
