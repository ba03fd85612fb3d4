//! Handlers for the aggregated movie views.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
///
/// Every movie with its reviews.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list_with_reviews(&state.pool).await?;

    tracing::debug!(count = movies.len(), "Listed movies");

    Ok(Json(movies))
}

/// GET /posts/{id}
///
/// One movie with its reviews. An id that is not an integer cannot match a
/// row, so it is reported as not found rather than as a bad request.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: raw_id.clone(),
        })
    };

    let id: DbId = raw_id.trim().parse().map_err(|_| not_found())?;

    let movie = MovieRepo::find_with_reviews(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(movie))
}
