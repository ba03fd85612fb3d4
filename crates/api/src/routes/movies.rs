//! Route definitions for the movie views.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// ```text
/// GET /posts         -> list_movies
/// GET /posts/{id}    -> get_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(movies::list_movies))
        .route("/posts/{id}", get(movies::get_movie))
}
