//! Repository for the `plans` table.

use sitebuilder_core::types::DbId;
use sqlx::PgPool;

use crate::models::plan::{CreatePlan, Plan};

const COLUMNS: &str = "id, name, price, description, features, created_at, updated_at";

/// Read access to subscription plans, plus inserts for seeding.
pub struct PlanRepo;

impl PlanRepo {
    /// List all plans ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plans ORDER BY id");
        sqlx::query_as::<_, Plan>(&query).fetch_all(pool).await
    }

    /// Find a plan by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Plan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plans WHERE id = $1");
        sqlx::query_as::<_, Plan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all plans.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM plans")
            .fetch_one(pool)
            .await
    }

    /// Insert a plan, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlan) -> Result<Plan, sqlx::Error> {
        let query = format!(
            "INSERT INTO plans (name, price, description, features)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plan>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.features)
            .fetch_one(pool)
            .await
    }
}
