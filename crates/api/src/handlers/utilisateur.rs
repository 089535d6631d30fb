//! Handlers for the `/utilisateurs` resource (account management).
//!
//! All handlers require the `ADMIN` role via [`RequireAdmin`]. Every
//! response goes through [`UtilisateurView`] so the password hash never
//! leaves the service.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use stagium_core::error::CoreError;
use stagium_core::placeholder::default_image;
use stagium_core::roles::{is_valid_role, ROLES};
use stagium_core::types::DbId;
use stagium_db::models::utilisateur::{CreateUtilisateur, UpdateUtilisateur, UtilisateurView};
use stagium_db::repositories::UtilisateurRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::{MessageResponse, Paginated};
use crate::state::AppState;

/// Minimum password length enforced on account creation and password change.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Filter parameters for `GET /utilisateurs`.
#[derive(Debug, Deserialize)]
pub struct UtilisateurListParams {
    pub search: Option<String>,
    pub role: Option<String>,
    pub etat: Option<String>,
}

impl UtilisateurListParams {
    /// Substring filter on `login`; empty string means no filter.
    fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Exact role filter; `all` means no filter.
    fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.is_empty() && *r != "all")
    }

    /// Active-flag filter; anything other than `true`/`false` means no filter.
    fn etat(&self) -> Option<bool> {
        match self.etat.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

/// Request body for `POST /utilisateurs`.
#[derive(Debug, Deserialize)]
pub struct CreateUtilisateurRequest {
    pub login: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub avatar: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/utilisateurs?page&limit&search&role&etat
///
/// List accounts, password hashes stripped.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<UtilisateurListParams>,
) -> AppResult<Json<Paginated<UtilisateurView>>> {
    let total = UtilisateurRepo::count_filtered(
        &state.pool,
        filter.search(),
        filter.role(),
        filter.etat(),
    )
    .await?;
    let rows = UtilisateurRepo::list_filtered(
        &state.pool,
        filter.search(),
        filter.role(),
        filter.etat(),
        pagination.limit(),
        pagination.offset(),
    )
    .await?;

    Ok(Json(Paginated {
        data: rows.into_iter().map(UtilisateurView::from).collect(),
        total,
        page: pagination.page(),
        limit: pagination.limit(),
    }))
}

/// GET /api/v1/utilisateurs/{id}
pub async fn get(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UtilisateurView>> {
    let user = UtilisateurRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id,
        }))?;
    Ok(Json(user.into()))
}

/// POST /api/v1/utilisateurs
///
/// Create a new account. A duplicate login is rejected with 400 before
/// any row is written; the password is Argon2id-hashed; an unset avatar
/// gets a placeholder file derived from the login.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUtilisateurRequest>,
) -> AppResult<Json<UtilisateurView>> {
    validate_role(&input.role)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UtilisateurRepo::find_by_login(&state.pool, &input.login)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Ce login existe déjà".into(),
        )));
    }

    let pwd = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let avatar = match input.avatar.as_deref() {
        Some(avatar) if !avatar.is_empty() => avatar.to_string(),
        _ => default_image(&input.login),
    };

    let create_dto = CreateUtilisateur {
        login: input.login,
        email: input.email,
        pwd,
        role: input.role,
        avatar,
    };

    let user = UtilisateurRepo::create(&state.pool, &create_dto).await?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/utilisateurs/{id}
///
/// Partial update of login/email/role/etat. Admins cannot deactivate
/// their own account.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUtilisateur>,
) -> AppResult<Json<UtilisateurView>> {
    if let Some(role) = &input.role {
        validate_role(role)?;
    }
    if id == admin.user_id && input.etat == Some(false) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Impossible de désactiver votre propre compte".into(),
        )));
    }

    let user = UtilisateurRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id,
        }))?;
    Ok(Json(user.into()))
}

/// DELETE /api/v1/utilisateurs/{id}
///
/// Delete an account. Admins cannot delete their own account.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Impossible de supprimer votre propre compte".into(),
        )));
    }

    let deleted = UtilisateurRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Utilisateur",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: "Utilisateur supprimé avec succès",
    }))
}

fn validate_role(role: &str) -> AppResult<()> {
    if !is_valid_role(role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Rôle invalide: doit être l'un de {ROLES:?}"
        ))));
    }
    Ok(())
}
