//! Route definitions for the `/plans` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::plans;
use crate::state::AppState;

/// Routes mounted at `/plans`.
///
/// ```text
/// GET /      -> list_plans
/// GET /{id}  -> get_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plans::list_plans))
        .route("/{id}", get(plans::get_plan))
}
