//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    /// The process is up but Postgres did not answer.
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_db_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always 200; a failed database probe shows up as `status: "degraded"`.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let probe = sitebuilder_db::health_check(&state.pool).await;
    if let Err(e) = &probe {
        tracing::warn!(error = %e, "Database probe failed");
    }
    Json(HealthReport::from_db_probe(probe.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
