//! Liveness and store reachability for load balancers and operators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Snapshot of the bounded connection pool.
#[derive(Debug, Serialize)]
pub struct PoolStatus {
    /// Connections currently open, idle or in use.
    pub size: u32,
    pub idle: usize,
    pub max_connections: u32,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool: PoolStatus,
}

/// GET /health
///
/// 200 when a trivial query succeeds, 503 when it does not. The body is the
/// same in both cases so operators can see the pool state during an outage.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = match marquee_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check query failed");
            false
        }
    };

    let report = HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool: PoolStatus {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
            max_connections: state.pool.options().get_max_connections(),
        },
    };

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}
