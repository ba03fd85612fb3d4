pub mod greeting;
pub mod health;
pub mod movies;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                 greeting (GET)
/// /health           service and database health (GET)
/// /posts            list movies with reviews (GET)
/// /posts/{id}       one movie with reviews (GET)
/// /reviews          add a review (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(greeting::router())
        .merge(health::router())
        .merge(movies::router())
        .merge(reviews::router())
}
