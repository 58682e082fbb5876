//! Shared request extractors.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// A missing, non-JSON, or malformed body becomes a 400 with the standard
/// `{ "error", "code" }` body instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor whose rejection is an [`AppError`].
///
/// An id segment that does not parse (`/sites/abc`, or one overflowing
/// `i64`) names no resource, so it is answered as a JSON 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
