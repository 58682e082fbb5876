//! Page template model.

use serde::Serialize;
use sitebuilder_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub preview_image_url: Option<String>,
    /// Serialized GrapesJS page: `html`, `css`, `components`, `styles`.
    pub grapesjs_json: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a template (seeding only).
#[derive(Debug, Clone)]
pub struct CreateTemplate {
    pub name: String,
    pub preview_image_url: Option<String>,
    pub grapesjs_json: Option<serde_json::Value>,
}
