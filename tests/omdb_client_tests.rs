use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use flickpick::models::MovieDetails;
use flickpick::services::{MetadataProvider, OmdbProvider};

/// Serves a router on an ephemeral local port, returning its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn provider(api_url: String) -> OmdbProvider {
    OmdbProvider::new(
        Some("test_key".to_string()),
        api_url,
        Duration::from_secs(2),
    )
}

#[tokio::test]
async fn test_success_response_extracted_verbatim() {
    let url = serve(Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "Response": "True",
                "Plot": "A story.",
                "Poster": "http://x/img.jpg"
            }))
        }),
    ))
    .await;

    let details = provider(url).fetch_details("Inception").await;
    assert_eq!(details.plot, "A story.");
    assert_eq!(details.poster, "http://x/img.jpg");
}

#[tokio::test]
async fn test_query_parameters_follow_omdb_form() {
    let seen: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();

    let url = serve(Router::new().route(
        "/",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(params);
                Json(json!({ "Response": "True", "Plot": "x", "Poster": "y" }))
            }
        }),
    ))
    .await;

    provider(url).fetch_details("The Matrix").await;

    let params = seen.lock().unwrap().take().unwrap();
    assert_eq!(params.get("t").map(String::as_str), Some("The Matrix"));
    assert_eq!(params.get("plot").map(String::as_str), Some("full"));
    assert_eq!(params.get("apikey").map(String::as_str), Some("test_key"));
}

#[tokio::test]
async fn test_http_error_status_collapses_to_sentinel() {
    let url = serve(Router::new().route(
        "/",
        get(|| async { (StatusCode::NOT_FOUND, "not here") }),
    ))
    .await;

    let details = provider(url).fetch_details("Inception").await;
    assert_eq!(details, MovieDetails::unavailable());
}

#[tokio::test]
async fn test_malformed_body_collapses_to_sentinel() {
    let url = serve(Router::new().route("/", get(|| async { "this is not json" })))
        .await;

    let details = provider(url).fetch_details("Inception").await;
    assert_eq!(details, MovieDetails::unavailable());
}

#[tokio::test]
async fn test_logical_failure_collapses_to_sentinel() {
    let url = serve(Router::new().route(
        "/",
        get(|| async { Json(json!({ "Response": "False", "Error": "Movie not found!" })) }),
    ))
    .await;

    let details = provider(url).fetch_details("Nonexistent").await;
    assert_eq!(details, MovieDetails::unavailable());
}

#[tokio::test]
async fn test_timeout_collapses_to_sentinel() {
    let url = serve(Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "Response": "True", "Plot": "late", "Poster": "late" }))
        }),
    ))
    .await;

    let provider = OmdbProvider::new(
        Some("test_key".to_string()),
        url,
        Duration::from_millis(100),
    );

    let details = provider.fetch_details("Inception").await;
    assert_eq!(details, MovieDetails::unavailable());
}

#[tokio::test]
async fn test_absent_credential_makes_no_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let url = serve(Router::new().route(
        "/",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "Response": "True", "Plot": "x", "Poster": "y" })).into_response()
            }
        }),
    ))
    .await;

    let provider = OmdbProvider::new(None, url, Duration::from_secs(2));

    let details = provider.fetch_details("Inception").await;
    assert_eq!(details, MovieDetails::unavailable());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_success_field_substituted_per_field() {
    let url = serve(Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "Response": "True",
                "Plot": "",
                "Poster": "http://x/img.jpg"
            }))
        }),
    ))
    .await;

    let details = provider(url).fetch_details("Inception").await;
    assert_eq!(details.plot, "N/A");
    assert_eq!(details.poster, "http://x/img.jpg");
}
