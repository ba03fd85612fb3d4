//! Handler for review ingestion.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use marquee_db::models::review::NewReviewRequest;
use marquee_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Plain-text body of a successful `POST /reviews`.
pub const REVIEW_CREATED_MESSAGE: &str = "Review added successfully";

/// Reported when a non-empty body is not declared as JSON.
pub const JSON_CONTENT_TYPE_MESSAGE: &str =
    "Expected request with `Content-Type: application/json`";

/// POST /reviews
///
/// Validates all four fields before touching the store, then inserts a
/// single row. The new row's id is not returned.
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let request = decode_request(&headers, &body)?;
    let input = request.validate()?;

    ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = input.movie_id, "Review created");

    Ok((StatusCode::CREATED, REVIEW_CREATED_MESSAGE))
}

/// An empty body carries no fields, so it is validated as `{}`.
fn decode_request(headers: &HeaderMap, body: &Bytes) -> Result<NewReviewRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewReviewRequest::default());
    }

    if !has_json_content_type(headers) {
        tracing::debug!("Rejected review body without JSON content type");
        return Err(AppError::BadRequest(JSON_CONTENT_TYPE_MESSAGE.to_string()));
    }

    let Json(request) = Json::<NewReviewRequest>::from_bytes(body).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected review body");
        AppError::BadRequest(rejection.body_text())
    })?;
    Ok(request)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    kind.eq_ignore_ascii_case("application")
        && (subtype.eq_ignore_ascii_case("json")
            || subtype.to_ascii_lowercase().ends_with("+json"))
}
