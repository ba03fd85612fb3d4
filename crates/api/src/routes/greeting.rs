use axum::routing::get;
use axum::Router;

use crate::handlers::greeting;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting::greeting))
}
