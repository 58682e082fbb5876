//! Subscription plan model.

use rust_decimal::Decimal;
use serde::Serialize;
use sitebuilder_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Plan {
    pub id: DbId,
    pub name: String,
    /// Stored as `NUMERIC(10, 2)`, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    /// Open-ended feature map (page count, template tier, boolean flags).
    pub features: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a plan (seeding only; plans are read-only over HTTP).
#[derive(Debug, Clone)]
pub struct CreatePlan {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub features: Option<serde_json::Value>,
}
