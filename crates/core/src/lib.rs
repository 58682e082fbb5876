//! Domain primitives shared by the database and API crates.
//!
//! - [`error`] -- the domain error taxonomy.
//! - [`types`] -- id and timestamp aliases.
//! - [`site_status`] -- accepted values for a site's lifecycle status.
//! - [`validation`] -- presence checks for request fields.

pub mod error;
pub mod site_status;
pub mod types;
pub mod validation;
