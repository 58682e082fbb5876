//! Repository for the `templates` table.

use sitebuilder_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::{CreateTemplate, Template};

const COLUMNS: &str = "id, name, preview_image_url, grapesjs_json, created_at, updated_at";

/// Read access to page templates, plus inserts for seeding.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List all templates ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates ORDER BY id");
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }

    /// Find a template by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all templates.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM templates")
            .fetch_one(pool)
            .await
    }

    /// Insert a template, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (name, preview_image_url, grapesjs_json)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(&input.name)
            .bind(&input.preview_image_url)
            .bind(&input.grapesjs_json)
            .fetch_one(pool)
            .await
    }
}
