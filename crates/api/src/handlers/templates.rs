//! Handlers for the `/templates` resource. Readable by any signed-in user.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sitebuilder_core::error::CoreError;
use sitebuilder_core::types::DbId;
use sitebuilder_db::models::template::Template;
use sitebuilder_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub template: Template,
}

/// GET /api/templates
pub async fn list_templates(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Template>>> {
    let templates = TemplateRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

/// GET /api/templates/{id}
pub async fn get_template(
    _user: AuthUser,
    State(state): State<AppState>,
    ApiPath(template_id): ApiPath<DbId>,
) -> AppResult<Json<TemplateResponse>> {
    let template = TemplateRepo::find_by_id(&state.pool, template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;

    Ok(Json(TemplateResponse { template }))
}
