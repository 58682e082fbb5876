pub mod auth;
pub mod health;
pub mod plans;
pub mod sites;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/profile                  current user (auth required)
///
/// /plans                         list (public)
/// /plans/{id}                    get (public)
///
/// /templates                     list (auth required)
/// /templates/{id}                get (auth required)
///
/// /sites                         list own, create (auth required)
/// /sites/{id}                    get, update, delete (owner only)
/// /sites/{id}/publish            publish (owner only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/plans", plans::router())
        .nest("/templates", templates::router())
        .nest("/sites", sites::router())
}
