//! Integration tests for the HTTP surface.
//!
//! These drive the real router with in-process requests: query string in,
//! JSON body out. The catalog is synthetic, injected through AppState the
//! same way main does after a file load.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog::{Catalog, Movie};
use http_body_util::BodyExt;
use serde_json::Value;
use server::{router, AppState};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let catalog = Catalog::from_movies(vec![
        Movie::new(Some("Alien"), Some("Horror"), Some("PG"), Some(8.5), Some(89.0)),
        Movie::new(Some("Annie"), Some("Musical"), Some("G"), None, Some(54.0)),
        Movie::new(Some("Saw"), Some("Horror"), Some("R"), Some(7.6), Some(50.0)),
    ]);
    router(AppState::new(catalog))
}

async fn get_json(app: axum::Router, uri: &str) -> Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn titles(movies: &Value) -> Vec<&str> {
    movies
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_unfiltered_listing_returns_full_catalog_in_order() {
    let movies = get_json(test_app(), "/api/movies").await;
    assert_eq!(titles(&movies), ["Alien", "Annie", "Saw"]);
}

#[tokio::test]
async fn test_search_parameter() {
    let movies = get_json(test_app(), "/api/movies?searchTerms=ali").await;
    assert_eq!(titles(&movies), ["Alien"]);
}

#[tokio::test]
async fn test_repeated_array_parameters_with_range() {
    let movies = get_json(
        test_app(),
        "/api/movies?mpaaRatings=PG&mpaaRatings=G&imdbMin=8.0",
    )
    .await;

    // Annie's null IMDB rating fails the one-sided bound, Saw's rating
    // isn't accepted
    assert_eq!(titles(&movies), ["Alien"]);
}

#[tokio::test]
async fn test_malformed_numeric_parameter_degrades_to_unfiltered() {
    let movies = get_json(test_app(), "/api/movies?imdbMin=definitely-not-a-number").await;
    assert_eq!(titles(&movies), ["Alien", "Annie", "Saw"]);
}

#[tokio::test]
async fn test_rt_upper_bound() {
    let movies = get_json(test_app(), "/api/movies?rtMax=60").await;
    assert_eq!(titles(&movies), ["Annie", "Saw"]);
}

#[tokio::test]
async fn test_response_carries_full_records() {
    let movies = get_json(test_app(), "/api/movies?searchTerms=alien").await;
    let alien = &movies.as_array().unwrap()[0];

    assert_eq!(alien["majorGenre"], "Horror");
    assert_eq!(alien["mpaaRating"], "PG");
    assert_eq!(alien["imdbRating"], 8.5);
    assert_eq!(alien["rottenTomatoesRating"], 89.0);
    // Untouched descriptive fields come through as null
    assert_eq!(alien["director"], Value::Null);
}

#[tokio::test]
async fn test_genres_endpoint_lists_derived_genres() {
    let genres = get_json(test_app(), "/api/genres").await;
    assert_eq!(genres, serde_json::json!(["Horror", "Musical"]));
}

#[tokio::test]
async fn test_mpaa_ratings_endpoint_lists_static_choices() {
    let ratings = get_json(test_app(), "/api/mpaa-ratings").await;
    assert_eq!(
        ratings,
        serde_json::json!(["G", "PG", "PG-13", "R", "NC-17"])
    );
}

#[tokio::test]
async fn test_index_page_is_served() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("ReelShelf"));
}
