//! HTTP-level integration tests for the movie views.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /posts
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_list_returns_one_entry_per_movie(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/posts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let movies = json.as_array().expect("array body");
    let ids: Vec<i64> = movies.iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_list_nests_reviews_with_public_field_names(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/posts").await).await;

    let first = &json[0];
    assert_eq!(first["title"], "Inception");
    assert_eq!(
        first["content"],
        "A thief who steals corporate secrets through dream-sharing."
    );
    assert_eq!(first["image"], "inception.jpg");
    assert!(first.get("abstract").is_none());

    let reviews = first["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    for review in reviews {
        assert!(review["id"].is_number());
        assert!(review["name"].is_string());
        assert!(review["vote"].is_number());
        assert!(review["text"].is_string());
    }
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_movie_without_reviews_lists_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/posts").await).await;

    let tenet = json
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == 3)
        .expect("movie 3 listed");
    assert_eq!(tenet["reviews"], serde_json::json!([]));
}

#[sqlx::test(migrations = false)]
async fn test_list_store_error_returns_500(pool: PgPool) {
    // No fixtures: the tables do not exist.
    let app = common::build_test_app(pool);
    let response = get(app, "/posts").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert_eq!(text, "Server error");
}

// ---------------------------------------------------------------------------
// GET /posts/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_get_movie_by_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/posts/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["title"], "Interstellar");
    assert_eq!(json["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(json["reviews"][0]["name"], "Carol");
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_get_movie_without_reviews_has_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/posts/3").await).await;

    assert_eq!(json["reviews"], serde_json::json!([]));
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_get_nonexistent_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/posts/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Movie not found");
}

#[sqlx::test(
    migrations = false,
    fixtures(path = "../../db/tests/fixtures", scripts("schema", "movies"))
)]
async fn test_get_non_numeric_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/posts/inception").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Movie not found");
}

#[sqlx::test(migrations = false)]
async fn test_get_store_error_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/posts/1").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = body_text(response).await;
    assert!(!text.contains("relation"), "store detail must not leak: {text}");
}
