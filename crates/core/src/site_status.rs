//! Site lifecycle status values and validation.
//!
//! These must match the `ck_sites_status` CHECK constraint in
//! `20261019000005_create_sites_table.sql`.

use crate::error::CoreError;

/// Site is being edited and has never been published.
pub const STATUS_DRAFT: &str = "draft";

/// Site has been marked as published.
pub const STATUS_PUBLISHED: &str = "published";

/// Site is in an error state.
pub const STATUS_ERROR: &str = "error";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISHED, STATUS_ERROR];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}
