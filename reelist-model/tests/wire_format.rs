//! Decoding of the JSON bodies the list backend returns.

use reelist_model::prelude::*;

#[test]
fn search_envelope_decodes_owner_lists() {
    let body = r#"{
        "items": [{
            "id": "01890a5d-ac96-774b-bcce-b302099a8057",
            "ownerId": "01890a5d-ac96-774b-bcce-b302099a8058",
            "title": "Best of Kurosawa",
            "description": null,
            "isPublic": true,
            "cover": null,
            "itemsCount": 9,
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-03T10:00:00Z",
            "ownerName": "mifune"
        }],
        "total": 41,
        "page": 2,
        "limit": 20
    }"#;

    let page: PaginatedResponse<ListWithOwner> =
        serde_json::from_str(body).expect("decode envelope");

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].owner_name, "mifune");
    assert!(page.items[0].is_public);
    assert!(page.has_more());
}

#[test]
fn list_item_defaults_optional_fields() {
    let body = r#"{
        "id": "01890a5d-ac96-774b-bcce-b302099a8060",
        "tmdbId": 603,
        "mediaType": "movie",
        "title": "The Matrix",
        "addedAt": "2024-05-01T10:00:00Z"
    }"#;

    let item: ListItem = serde_json::from_str(body).expect("decode item");
    assert_eq!(item.tmdb_id, 603);
    assert_eq!(item.media_type, MediaType::Movie);
    assert_eq!(item.poster_path, None);
    assert_eq!(item.notes, None);
}

#[test]
fn tv_media_type_is_lowercase_on_the_wire() {
    let json = serde_json::to_string(&MediaType::Tv).expect("encode");
    assert_eq!(json, "\"tv\"");
    assert_eq!("tv".parse::<MediaType>().ok(), Some(MediaType::Tv));
    assert!("series".parse::<MediaType>().is_err());
}
