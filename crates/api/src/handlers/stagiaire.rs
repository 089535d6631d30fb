//! Handlers for the `/stagiaires` resource.
//!
//! Reads embed the resolved filière; writes validate the civilité marker
//! and that the referenced filière exists before touching the table.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use stagium_core::civilite::{is_valid_civilite, CIVILITES};
use stagium_core::error::CoreError;
use stagium_core::placeholder::default_image;
use stagium_core::types::DbId;
use stagium_db::models::stagiaire::{
    CreateStagiaire, Stagiaire, StagiaireWithFiliere, UpdateStagiaire,
};
use stagium_db::repositories::{FiliereRepo, StagiaireRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::PaginationParams;
use crate::response::{MessageResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Filter parameters for `GET /stagiaires`.
#[derive(Debug, Deserialize)]
pub struct StagiaireListParams {
    pub search: Option<String>,
    pub filiere_id: Option<DbId>,
}

impl StagiaireListParams {
    /// Substring filter on nom OR prenom; empty string means no filter.
    fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Exact filière filter; `0` (the UI's "all filières") means no filter.
    fn filiere_id(&self) -> Option<DbId> {
        self.filiere_id.filter(|id| *id != 0)
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/stagiaires?page&limit&search&filiere_id
///
/// List stagiaires with their filière resolved.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<StagiaireListParams>,
) -> AppResult<Json<Paginated<StagiaireWithFiliere>>> {
    let total =
        StagiaireRepo::count_filtered(&state.pool, filter.search(), filter.filiere_id()).await?;
    let data = StagiaireRepo::list_filtered(
        &state.pool,
        filter.search(),
        filter.filiere_id(),
        pagination.limit(),
        pagination.offset(),
    )
    .await?;

    Ok(Json(Paginated {
        data,
        total,
        page: pagination.page(),
        limit: pagination.limit(),
    }))
}

/// GET /api/v1/stagiaires/{id}
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<StagiaireWithFiliere>> {
    let stagiaire = StagiaireRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stagiaire",
            id,
        }))?;
    Ok(Json(stagiaire))
}

/// POST /api/v1/stagiaires
///
/// Create a new stagiaire. Admin only. An unset photo gets a placeholder
/// file derived from the trainee's name.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(mut input): Json<CreateStagiaire>,
) -> AppResult<Json<Stagiaire>> {
    validate_civilite(&input.civilite)?;
    ensure_filiere_exists(&state, input.id_filiere).await?;

    if input.photo.as_deref().is_none_or(str::is_empty) {
        input.photo = Some(default_image(&format!("{} {}", input.nom, input.prenom)));
    }

    let stagiaire = StagiaireRepo::create(&state.pool, &input).await?;
    Ok(Json(stagiaire))
}

/// PUT /api/v1/stagiaires/{id}
///
/// Partial update. Admin only.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStagiaire>,
) -> AppResult<Json<Stagiaire>> {
    if let Some(civilite) = &input.civilite {
        validate_civilite(civilite)?;
    }
    if let Some(filiere_id) = input.id_filiere {
        ensure_filiere_exists(&state, filiere_id).await?;
    }

    let stagiaire = StagiaireRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stagiaire",
            id,
        }))?;
    Ok(Json(stagiaire))
}

/// DELETE /api/v1/stagiaires/{id}
///
/// Unconditional delete. Admin only.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = StagiaireRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Stagiaire",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: "Stagiaire supprimé avec succès",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_civilite(civilite: &str) -> AppResult<()> {
    if !is_valid_civilite(civilite) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Civilité invalide: doit être l'un de {CIVILITES:?}"
        ))));
    }
    Ok(())
}

/// Reject writes referencing a filière that does not exist, before the FK
/// constraint turns it into an opaque database error.
async fn ensure_filiere_exists(state: &AppState, filiere_id: DbId) -> AppResult<()> {
    if !FiliereRepo::exists(&state.pool, filiere_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "La filière {filiere_id} n'existe pas"
        ))));
    }
    Ok(())
}
