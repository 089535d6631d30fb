//! Repository for the `stagiaire` table.
//!
//! Reads resolve the filière inline (single JOIN) so list and get can
//! return [`StagiaireWithFiliere`] without a second query per row.

use sqlx::FromRow;
use sqlx::PgPool;
use stagium_core::types::{DbId, Timestamp};

use crate::models::stagiaire::{
    CreateStagiaire, FiliereRef, Stagiaire, StagiaireWithFiliere, UpdateStagiaire,
};

/// Column list for bare stagiaire rows.
const COLUMNS: &str = "id, nom, prenom, civilite, photo, id_filiere, created_at";

/// Column list for JOINed reads; aliases match [`JoinedRow`].
const JOINED_COLUMNS: &str = "s.id, s.nom, s.prenom, s.civilite, s.photo, s.id_filiere, \
                              s.created_at, f.nom_filiere AS filiere_nom, f.niveau AS filiere_niveau";

/// Flat row shape produced by the JOIN, mapped into the nested response.
#[derive(Debug, FromRow)]
struct JoinedRow {
    id: DbId,
    nom: String,
    prenom: String,
    civilite: String,
    photo: String,
    id_filiere: DbId,
    created_at: Timestamp,
    filiere_nom: String,
    filiere_niveau: String,
}

impl From<JoinedRow> for StagiaireWithFiliere {
    fn from(row: JoinedRow) -> Self {
        StagiaireWithFiliere {
            id: row.id,
            nom: row.nom,
            prenom: row.prenom,
            civilite: row.civilite,
            photo: row.photo,
            id_filiere: row.id_filiere,
            created_at: row.created_at,
            filiere: FiliereRef {
                id: row.id_filiere,
                nom_filiere: row.filiere_nom,
                niveau: row.filiere_niveau,
            },
        }
    }
}

/// Provides CRUD operations for stagiaires.
pub struct StagiaireRepo;

impl StagiaireRepo {
    /// Insert a new stagiaire, returning the created row (no JOIN).
    ///
    /// `input.photo` must already be resolved; the placeholder default is
    /// the handler's job.
    pub async fn create(pool: &PgPool, input: &CreateStagiaire) -> Result<Stagiaire, sqlx::Error> {
        let photo = input.photo.as_deref().unwrap_or_default();
        let query = format!(
            "INSERT INTO stagiaire (nom, prenom, civilite, photo, id_filiere)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stagiaire>(&query)
            .bind(&input.nom)
            .bind(&input.prenom)
            .bind(&input.civilite)
            .bind(photo)
            .bind(input.id_filiere)
            .fetch_one(pool)
            .await
    }

    /// Find a stagiaire by ID with its filière resolved.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StagiaireWithFiliere>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM stagiaire s
             JOIN filiere f ON f.id = s.id_filiere
             WHERE s.id = $1"
        );
        let row = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(StagiaireWithFiliere::from))
    }

    /// List stagiaires matching the filter, filière resolved, ordered by
    /// id ascending.
    ///
    /// `search` is a case-insensitive substring match on `nom` OR `prenom`;
    /// `filiere_id` is an exact match.
    pub async fn list_filtered(
        pool: &PgPool,
        search: Option<&str>,
        filiere_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StagiaireWithFiliere>, sqlx::Error> {
        let (where_clause, param_idx) = build_filter(search, filiere_id);
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM stagiaire s
             JOIN filiere f ON f.id = s.id_filiere
             {where_clause}
             ORDER BY s.id ASC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, JoinedRow>(&query);
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(filiere_id) = filiere_id {
            q = q.bind(filiere_id);
        }
        let rows = q.bind(limit).bind(offset).fetch_all(pool).await?;
        Ok(rows.into_iter().map(StagiaireWithFiliere::from).collect())
    }

    /// Count stagiaires matching the same filter as [`Self::list_filtered`].
    pub async fn count_filtered(
        pool: &PgPool,
        search: Option<&str>,
        filiere_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = build_filter(search, filiere_id);
        let query = format!("SELECT COUNT(*) FROM stagiaire s {where_clause}");

        let mut q = sqlx::query_as::<_, (i64,)>(&query);
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(filiere_id) = filiere_id {
            q = q.bind(filiere_id);
        }
        let (count,) = q.fetch_one(pool).await?;
        Ok(count)
    }

    /// Update a stagiaire. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStagiaire,
    ) -> Result<Option<Stagiaire>, sqlx::Error> {
        let query = format!(
            "UPDATE stagiaire SET
                nom = COALESCE($2, nom),
                prenom = COALESCE($3, prenom),
                civilite = COALESCE($4, civilite),
                id_filiere = COALESCE($5, id_filiere),
                photo = COALESCE($6, photo)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stagiaire>(&query)
            .bind(id)
            .bind(&input.nom)
            .bind(&input.prenom)
            .bind(&input.civilite)
            .bind(input.id_filiere)
            .bind(&input.photo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a stagiaire. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stagiaire WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count stagiaires enrolled in the given filière. Used as the
    /// delete-conflict guard on filières.
    pub async fn count_by_filiere(pool: &PgPool, filiere_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM stagiaire WHERE id_filiere = $1")
                .bind(filiere_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}

/// Build the WHERE clause for the list/count filter pair and return it with
/// the next free bind-parameter index.
fn build_filter(search: Option<&str>, filiere_id: Option<DbId>) -> (String, usize) {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_idx: usize = 1;

    if search.is_some() {
        conditions.push(format!(
            "(s.nom ILIKE ${param_idx} OR s.prenom ILIKE ${param_idx})"
        ));
        param_idx += 1;
    }
    if filiere_id.is_some() {
        conditions.push(format!("s.id_filiere = ${param_idx}"));
        param_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, param_idx)
}
