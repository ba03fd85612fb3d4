//! Route definitions for reviews.

use axum::routing::post;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// ```text
/// POST /reviews      -> create_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reviews", post(reviews::create_review))
}
