//! Movie search debounce, pagination and stale-response tests
//!
//! All tests run on paused time: sleeps advance the virtual clock, so the
//! debounce windows are exact.

use std::sync::Arc;
use std::time::Duration;

use reelist_client::domains::search::MovieSearchStore;
use reelist_client::infra::testing::fixtures::{movie, movie_page};
use reelist_client::infra::testing::{StubMovieCatalog, init_test_logging};

const DEBOUNCE: Duration = Duration::from_millis(500);

fn store(catalog: &StubMovieCatalog) -> MovieSearchStore {
    init_test_logging();
    MovieSearchStore::with_timing(Arc::new(catalog.clone()), DEBOUNCE, 2)
}

async fn type_out(store: &MovieSearchStore, text: &str, gap: Duration) {
    let mut typed = String::new();
    for ch in text.chars() {
        typed.push(ch);
        store.set_query(typed.clone());
        tokio::time::sleep(gap).await;
    }
}

#[tokio::test(start_paused = true)]
async fn typing_batman_issues_one_request() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page(
        "batman",
        movie_page(1, 3, vec![movie(268, "Batman"), movie(272, "Batman Begins")]),
    );
    let store = store(&catalog);

    type_out(&store, "batman", Duration::from_millis(60)).await;
    assert!(catalog.search_calls().is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(catalog.search_calls(), vec![("batman".to_string(), 1)]);
    let state = store.state();
    assert!(state.has_searched);
    assert!(!state.loading);
    assert_eq!(state.movies.len(), 2);
    assert_eq!(state.movies[0].title, "Batman");
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 3);
    assert!(state.has_more_pages());
}

#[tokio::test(start_paused = true)]
async fn request_fires_only_after_the_pause() {
    let catalog = StubMovieCatalog::new();
    let store = store(&catalog);

    store.set_query("alien");
    tokio::time::sleep(Duration::from_millis(499)).await;
    assert!(catalog.search_calls().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(catalog.search_calls().len(), 1);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(catalog.search_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn shortening_the_query_resets_everything() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page("alien", movie_page(1, 2, vec![movie(348, "Alien")]));
    let store = store(&catalog);
    store.set_query("alien");
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(store.state().has_searched);

    store.set_query("a");

    let state = store.state();
    assert!(state.movies.is_empty());
    assert!(!state.has_searched);
    assert!(!state.has_more_pages());
    assert_eq!(state.query, "a");
}

#[tokio::test(start_paused = true)]
async fn slow_earlier_response_does_not_overwrite_newer_results() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page("bat", movie_page(1, 9, vec![movie(1, "Bat*21")]));
    catalog.set_latency("bat", Duration::from_secs(3));
    catalog.set_page("batman", movie_page(1, 1, vec![movie(268, "Batman")]));
    let store = store(&catalog);

    store.set_query("bat");
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(catalog.search_calls().len(), 1);

    store.set_query("batman");
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(store.state().movies[0].title, "Batman");

    // the "bat" answer lands now and must be ignored
    tokio::time::sleep(Duration::from_secs(5)).await;

    let state = store.state();
    assert_eq!(catalog.search_calls().len(), 2);
    assert_eq!(state.movies.len(), 1);
    assert_eq!(state.movies[0].title, "Batman");
    assert_eq!(state.total_pages, 1);
    assert!(!state.loading);
}

#[tokio::test(start_paused = true)]
async fn load_more_is_a_noop_on_the_last_page() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page("heat", movie_page(1, 1, vec![movie(949, "Heat")]));
    let store = store(&catalog);
    store.set_query("heat");
    store.search_now().await;
    let before = store.state();
    assert!(!before.has_more_pages());

    store.load_more_movies().await;

    assert_eq!(catalog.search_calls().len(), 1);
    assert_eq!(store.state(), before);
}

#[tokio::test(start_paused = true)]
async fn load_more_before_any_search_does_nothing() {
    let catalog = StubMovieCatalog::new();
    let store = store(&catalog);

    store.load_more_movies().await;

    assert!(catalog.search_calls().is_empty());
    assert!(!store.state().loading);
}

#[tokio::test(start_paused = true)]
async fn load_more_appends_next_page() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page("star", movie_page(1, 2, vec![movie(11, "Star Wars")]));
    catalog.set_page(
        "star",
        movie_page(2, 2, vec![movie(1891, "The Empire Strikes Back")]),
    );
    let store = store(&catalog);
    store.set_query("star");
    store.search_now().await;

    store.load_more_movies().await;

    let state = store.state();
    assert_eq!(
        catalog.search_calls(),
        vec![("star".to_string(), 1), ("star".to_string(), 2)]
    );
    let titles: Vec<&str> =
        state.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Star Wars", "The Empire Strikes Back"]);
    assert_eq!(state.current_page, 2);
    assert!(!state.has_more_pages());
}

#[tokio::test(start_paused = true)]
async fn concurrent_load_more_sends_one_request() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page("star", movie_page(1, 5, vec![movie(11, "Star Wars")]));
    catalog.set_page("star", movie_page(2, 5, vec![movie(12, "Star Trek")]));
    let store = store(&catalog);
    store.set_query("star");
    store.search_now().await;
    catalog.set_latency("star", Duration::from_millis(300));

    tokio::join!(store.load_more_movies(), store.load_more_movies());

    assert_eq!(catalog.search_calls().len(), 2);
    assert_eq!(store.state().movies.len(), 2);
    assert_eq!(store.state().current_page, 2);
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_loading_then_results() {
    let catalog = StubMovieCatalog::new();
    catalog.set_page("alien", movie_page(1, 1, vec![movie(348, "Alien")]));
    catalog.set_latency("alien", Duration::from_millis(200));
    let store = store(&catalog);
    let mut rx = store.subscribe();

    store.set_query("alien");
    tokio::time::sleep(Duration::from_millis(550)).await;
    assert!(rx.borrow_and_update().loading);

    rx.changed().await.expect("store alive");
    let state = rx.borrow_and_update().clone();
    assert!(!state.loading);
    assert_eq!(state.movies.len(), 1);
}
