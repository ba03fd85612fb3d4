/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created at startup and closed on shutdown.
    pub pool: marquee_db::DbPool,
}
