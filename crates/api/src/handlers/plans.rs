//! Handlers for the public `/plans` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sitebuilder_core::error::CoreError;
use sitebuilder_core::types::DbId;
use sitebuilder_db::models::plan::Plan;
use sitebuilder_db::repositories::PlanRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Plan,
}

/// GET /api/plans
pub async fn list_plans(State(state): State<AppState>) -> AppResult<Json<Vec<Plan>>> {
    let plans = PlanRepo::list(&state.pool).await?;
    Ok(Json(plans))
}

/// GET /api/plans/{id}
pub async fn get_plan(
    State(state): State<AppState>,
    ApiPath(plan_id): ApiPath<DbId>,
) -> AppResult<Json<PlanResponse>> {
    let plan = PlanRepo::find_by_id(&state.pool, plan_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plan",
            id: plan_id,
        }))?;

    Ok(Json(PlanResponse { plan }))
}
