//! Handlers for the `/auth` resource (register, login, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitebuilder_core::error::CoreError;
use sitebuilder_core::types::DbId;
use sitebuilder_core::validation::require_present;
use sitebuilder_db::models::user::{CreateUser, UserResponse};
use sitebuilder_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/login`.
///
/// Both fields are optional at the type level so that absence is reported as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub access_token: String,
    pub user: UserResponse,
}

/// Response body for `GET /auth/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account and return an access token for it. Emails are compared
/// exactly; `A@x.com` and `a@x.com` are different accounts.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let email = require_present("email", input.email.as_ref())?;
    let password = require_present("password", input.password.as_ref())?;

    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: email.clone(),
            password_hash,
        },
    )
    .await?;

    let access_token = issue_token(&state, user.id)?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully",
            access_token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Unknown email and wrong password
/// produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = require_present("email", input.email.as_ref())?;
    let password = require_present("password", input.password.as_ref())?;

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    if !verify_password(password, &user.password_hash) {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let access_token = issue_token(&state, user.id)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        message: "Login successful",
        access_token,
        user: user.into(),
    }))
}

/// GET /api/auth/profile
///
/// Return the authenticated user. A valid token for a user row that no
/// longer exists yields 404.
pub async fn profile(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;

    Ok(Json(ProfileResponse { user: user.into() }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn issue_token(state: &AppState, user_id: DbId) -> AppResult<String> {
    generate_access_token(user_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}
