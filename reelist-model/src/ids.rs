use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Strongly typed ID for user lists
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ListId(pub Uuid);

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl ListId {
    pub fn new() -> Self {
        ListId(Uuid::now_v7())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ListId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ListId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ModelError::InvalidId(
                "List ID cannot be empty".to_string(),
            ));
        }
        s.parse()
            .map(ListId)
            .map_err(|e| ModelError::InvalidId(format!("list id {s}: {e}")))
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for entries inside a list
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ListItemId(pub Uuid);

impl Default for ListItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl ListItemId {
    pub fn new() -> Self {
        ListItemId(Uuid::now_v7())
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for ListItemId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ModelError::InvalidId(
                "List item ID cannot be empty".to_string(),
            ));
        }
        s.parse().map(ListItemId).map_err(|e| {
            ModelError::InvalidId(format!("list item id {s}: {e}"))
        })
    }
}

impl std::fmt::Display for ListItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for list owners
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(UserId)
            .map_err(|e| ModelError::InvalidId(format!("user id {s}: {e}")))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_id_round_trips_through_display() {
        let id = ListId::new();
        let parsed: ListId = id.to_string().parse().expect("parse list id");
        assert_eq!(id, parsed);
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert!("".parse::<ListId>().is_err());
        assert!("".parse::<ListItemId>().is_err());
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = ListItemId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id));
    }
}
