//! Site entity model, DTOs, and creation outcome.

use serde::Serialize;
use sitebuilder_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `sites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Site {
    pub id: DbId,
    pub user_id: DbId,
    pub domain: String,
    pub template_id: DbId,
    /// Independent copy of the template's `grapesjs_json`, edited per site.
    pub content_data: Option<serde_json::Value>,
    /// One of `sitebuilder_core::site_status::VALID_STATUSES`.
    pub status: String,
    pub hosting_account_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a site. The owner comes from the authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateSite {
    pub domain: String,
    pub template_id: DbId,
}

/// DTO for updating a site. Only the editable fields exist here; `None`
/// leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSite {
    pub content_data: Option<serde_json::Value>,
    pub status: Option<String>,
}

/// Result of [`SiteRepo::create`](crate::repositories::SiteRepo::create).
///
/// The two rejection cases are checked inside the insert transaction, so
/// nothing is persisted when they are returned.
#[derive(Debug)]
pub enum CreateSiteOutcome {
    Created(Site),
    TemplateNotFound,
    DomainTaken,
}
