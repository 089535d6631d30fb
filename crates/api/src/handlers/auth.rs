//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use stagium_core::error::CoreError;
use stagium_db::models::utilisateur::UtilisateurView;
use stagium_db::repositories::UtilisateurRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Uniform failure message. Unknown login, wrong password, and deactivated
/// account are indistinguishable to the caller (no user enumeration).
const BAD_CREDENTIALS: &str = "Identifiants incorrects";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UtilisateurView,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with login + password. Returns a bearer token and the user
/// record with the password hash stripped.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UtilisateurRepo::find_by_login(&state.pool, &input.login)
        .await?
        .ok_or_else(bad_credentials)?;

    if !user.etat {
        return Err(bad_credentials());
    }

    let password_valid = verify_password(&input.password, &user.pwd)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(bad_credentials());
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, login = %user.login, "successful login");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.into(),
    }))
}

fn bad_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into()))
}
