//! Handlers for the `/filieres` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use stagium_core::error::CoreError;
use stagium_core::niveau::{is_valid_niveau, NIVEAUX};
use stagium_core::types::DbId;
use stagium_db::models::filiere::{CreateFiliere, Filiere, UpdateFiliere};
use stagium_db::repositories::{FiliereRepo, StagiaireRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::PaginationParams;
use crate::response::{MessageResponse, Paginated};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Filter parameters for `GET /filieres`.
#[derive(Debug, Deserialize)]
pub struct FiliereListParams {
    pub search: Option<String>,
    pub niveau: Option<String>,
}

impl FiliereListParams {
    /// Substring filter on `nom_filiere`; empty string means no filter.
    fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Exact niveau filter; `all` (the UI's "no selection") means no filter.
    fn niveau(&self) -> Option<&str> {
        self.niveau.as_deref().filter(|n| !n.is_empty() && *n != "all")
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/filieres?page&limit&search&niveau
///
/// List filières with filtering and pagination.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<FiliereListParams>,
) -> AppResult<Json<Paginated<Filiere>>> {
    let total =
        FiliereRepo::count_filtered(&state.pool, filter.search(), filter.niveau()).await?;
    let data = FiliereRepo::list_filtered(
        &state.pool,
        filter.search(),
        filter.niveau(),
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

/// GET /api/v1/filieres/{id}
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Filiere>> {
    let filiere = FiliereRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Filiere",
            id,
        }))?;
    Ok(Json(filiere))
}

/// POST /api/v1/filieres
///
/// Create a new filière. Admin only.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFiliere>,
) -> AppResult<Json<Filiere>> {
    validate_niveau(&input.niveau)?;

    let filiere = FiliereRepo::create(&state.pool, &input).await?;
    Ok(Json(filiere))
}

/// PUT /api/v1/filieres/{id}
///
/// Partial update. Admin only.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFiliere>,
) -> AppResult<Json<Filiere>> {
    if let Some(niveau) = &input.niveau {
        validate_niveau(niveau)?;
    }

    let filiere = FiliereRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Filiere",
            id,
        }))?;
    Ok(Json(filiere))
}

/// DELETE /api/v1/filieres/{id}
///
/// Delete a filière. Admin only. Blocked with 409 Conflict while any
/// stagiaire is enrolled in it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if FiliereRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Filiere",
            id,
        }));
    }

    let referencing = StagiaireRepo::count_by_filiere(&state.pool, id).await?;
    if referencing > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Impossible de supprimer cette filière car elle est utilisée par des stagiaires"
                .into(),
        )));
    }

    FiliereRepo::delete(&state.pool, id).await?;
    Ok(Json(MessageResponse {
        message: "Filière supprimée avec succès",
    }))
}

fn validate_niveau(niveau: &str) -> AppResult<()> {
    if !is_valid_niveau(niveau) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Niveau invalide: doit être l'un de {NIVEAUX:?}"
        ))));
    }
    Ok(())
}
