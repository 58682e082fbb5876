//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate required fields, delegate to the corresponding
//! repository in `sitebuilder_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod plans;
pub mod sites;
pub mod templates;
