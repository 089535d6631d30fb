//! Handlers for the `/profile` resource.
//!
//! Lets any authenticated user read their own record and change their own
//! email and password. Role and active-flag changes stay admin-only in the
//! `/utilisateurs` handlers.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use stagium_core::error::CoreError;
use stagium_db::models::utilisateur::{UpdateUtilisateur, UtilisateurView};
use stagium_db::repositories::UtilisateurRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::utilisateur::MIN_PASSWORD_LENGTH;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Request body for `PUT /profile`. Both fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// GET /api/v1/profile
///
/// The authenticated user's own record, password hash stripped. Reads the
/// datastore rather than trusting anything client-held.
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<UtilisateurView>> {
    let row = UtilisateurRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id: user.user_id,
        }))?;
    Ok(Json(row.into()))
}

/// PUT /api/v1/profile
///
/// Update the authenticated user's own email and/or password. The password
/// is re-hashed with Argon2id before storage.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<UtilisateurView>> {
    if let Some(password) = input.password.as_deref().filter(|p| !p.is_empty()) {
        validate_password_strength(password, MIN_PASSWORD_LENGTH)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        let pwd = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        UtilisateurRepo::update_password(&state.pool, user.user_id, &pwd).await?;
    }

    if input.email.is_some() {
        let update_dto = UpdateUtilisateur {
            login: None,
            email: input.email,
            role: None,
            etat: None,
        };
        UtilisateurRepo::update(&state.pool, user.user_id, &update_dto).await?;
    }

    let row = UtilisateurRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id: user.user_id,
        }))?;
    Ok(Json(row.into()))
}
