//! Handlers for the `/sites` resource.
//!
//! Every endpoint is scoped to the authenticated user. A site owned by
//! someone else is reported exactly like a missing one (404), never as 403.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitebuilder_core::error::CoreError;
use sitebuilder_core::site_status::validate_status;
use sitebuilder_core::types::DbId;
use sitebuilder_core::validation::require_present;
use sitebuilder_db::models::site::{CreateSite, CreateSiteOutcome, Site, UpdateSite};
use sitebuilder_db::repositories::SiteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /sites`.
#[derive(Debug, Deserialize)]
pub struct CreateSiteRequest {
    pub domain: Option<String>,
    pub template_id: Option<DbId>,
}

/// Request body for `PUT /sites/{id}`. Any other field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSiteRequest {
    pub content_data: Option<serde_json::Value>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SiteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub site: Site,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/sites
pub async fn list_sites(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Site>>> {
    let sites = SiteRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(sites))
}

/// POST /api/sites
///
/// Create a site from a template. The site's content starts as a copy of
/// the template document and its status starts as `draft`.
pub async fn create_site(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateSiteRequest>,
) -> AppResult<impl IntoResponse> {
    let domain = require_present("domain", input.domain.as_ref())?;
    let template_id = *require_present("template_id", input.template_id.as_ref())?;

    let create = CreateSite {
        domain: domain.clone(),
        template_id,
    };

    let site = match SiteRepo::create(&state.pool, user.user_id, &create).await? {
        CreateSiteOutcome::Created(site) => site,
        CreateSiteOutcome::TemplateNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Template",
                id: template_id,
            }));
        }
        CreateSiteOutcome::DomainTaken => {
            return Err(AppError::Core(CoreError::Conflict(
                "Domain is already in use".into(),
            )));
        }
    };

    tracing::info!(
        site_id = site.id,
        user_id = user.user_id,
        domain = %site.domain,
        template_id,
        "Site created",
    );

    Ok((
        StatusCode::CREATED,
        Json(SiteResponse {
            message: Some("Site created successfully"),
            site,
        }),
    ))
}

/// GET /api/sites/{id}
pub async fn get_site(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(site_id): ApiPath<DbId>,
) -> AppResult<Json<SiteResponse>> {
    let site = SiteRepo::find_for_user(&state.pool, site_id, user.user_id)
        .await?
        .ok_or_else(|| site_not_found(site_id))?;

    Ok(Json(SiteResponse {
        message: None,
        site,
    }))
}

/// PUT /api/sites/{id}
///
/// Replace the site's content document and/or status. Fields left out of
/// the body keep their current value.
pub async fn update_site(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(site_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateSiteRequest>,
) -> AppResult<Json<SiteResponse>> {
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let update = UpdateSite {
        content_data: input.content_data,
        status: input.status,
    };

    let site = SiteRepo::update_for_user(&state.pool, site_id, user.user_id, &update)
        .await?
        .ok_or_else(|| site_not_found(site_id))?;

    tracing::info!(
        site_id,
        user_id = user.user_id,
        status = %site.status,
        "Site updated",
    );

    Ok(Json(SiteResponse {
        message: Some("Site updated successfully"),
        site,
    }))
}

/// DELETE /api/sites/{id}
pub async fn delete_site(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(site_id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = SiteRepo::delete_for_user(&state.pool, site_id, user.user_id).await?;
    if !deleted {
        return Err(site_not_found(site_id));
    }

    tracing::info!(site_id, user_id = user.user_id, "Site deleted");

    Ok(Json(MessageResponse {
        message: "Site deleted successfully",
    }))
}

/// POST /api/sites/{id}/publish
///
/// Marks the site as published. Nothing is built or deployed; this only
/// records the status change.
pub async fn publish_site(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(site_id): ApiPath<DbId>,
) -> AppResult<Json<SiteResponse>> {
    let site = SiteRepo::publish_for_user(&state.pool, site_id, user.user_id)
        .await?
        .ok_or_else(|| site_not_found(site_id))?;

    tracing::info!(site_id, user_id = user.user_id, "Site published");

    Ok(Json(SiteResponse {
        message: Some("Site published successfully"),
        site,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn site_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Site", id })
}
