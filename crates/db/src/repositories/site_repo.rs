//! Repository for the `sites` table.
//!
//! Every read and write other than [`SiteRepo::create`] is scoped to the
//! owning user: a site that exists but belongs to someone else is
//! indistinguishable from a missing one.

use sitebuilder_core::site_status::STATUS_PUBLISHED;
use sitebuilder_core::types::DbId;
use sqlx::PgPool;

use crate::models::site::{CreateSite, CreateSiteOutcome, Site, UpdateSite};

const COLUMNS: &str = "id, user_id, domain, template_id, content_data, status, \
                       hosting_account_id, created_at, updated_at";

/// Provides ownership-scoped CRUD operations for sites.
pub struct SiteRepo;

impl SiteRepo {
    /// Create a site for `user_id` from a template.
    ///
    /// Runs in a single transaction: the template must exist and the domain
    /// must be free. The template's `grapesjs_json` is copied into
    /// `content_data` by value, so later edits to either document never
    /// affect the other. Status starts as the column default (`draft`).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateSite,
    ) -> Result<CreateSiteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let template_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM templates WHERE id = $1)")
                .bind(input.template_id)
                .fetch_one(&mut *tx)
                .await?;
        if !template_exists {
            return Ok(CreateSiteOutcome::TemplateNotFound);
        }

        let domain_taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM sites WHERE domain = $1)")
                .bind(&input.domain)
                .fetch_one(&mut *tx)
                .await?;
        if domain_taken {
            return Ok(CreateSiteOutcome::DomainTaken);
        }

        let insert_query = format!(
            "INSERT INTO sites (user_id, domain, template_id, content_data) \
             SELECT $1, $2, t.id, t.grapesjs_json FROM templates t WHERE t.id = $3 \
             RETURNING {COLUMNS}"
        );
        let site = sqlx::query_as::<_, Site>(&insert_query)
            .bind(user_id)
            .bind(&input.domain)
            .bind(input.template_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(CreateSiteOutcome::Created(site))
    }

    /// List the sites owned by `user_id`, ordered by ID.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Site>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a site by ID if it is owned by `user_id`.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a site's content and/or status.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if the site does not exist or is not owned by `user_id`.
    pub async fn update_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateSite,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!(
            "UPDATE sites SET \
                 content_data = COALESCE($3, content_data), \
                 status = COALESCE($4, status) \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.content_data)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a site owned by `user_id`.
    ///
    /// Returns `true` if a row was deleted. Of two concurrent deletes of the
    /// same site, only one observes `true`.
    pub async fn delete_for_user(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a site owned by `user_id` as published.
    ///
    /// Only flips the status; nothing is generated or deployed.
    pub async fn publish_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!(
            "UPDATE sites SET status = $3 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .bind(user_id)
            .bind(STATUS_PUBLISHED)
            .fetch_optional(pool)
            .await
    }
}
