//! Repository for the `filiere` table.

use sqlx::PgPool;
use stagium_core::types::DbId;

use crate::models::filiere::{CreateFiliere, Filiere, UpdateFiliere};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nom_filiere, niveau, created_at";

/// Provides CRUD operations for filières.
pub struct FiliereRepo;

impl FiliereRepo {
    /// Insert a new filière, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFiliere) -> Result<Filiere, sqlx::Error> {
        let query = format!(
            "INSERT INTO filiere (nom_filiere, niveau)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filiere>(&query)
            .bind(&input.nom_filiere)
            .bind(&input.niveau)
            .fetch_one(pool)
            .await
    }

    /// Find a filière by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Filiere>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filiere WHERE id = $1");
        sqlx::query_as::<_, Filiere>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List filières matching the filter, ordered by id ascending.
    ///
    /// `search` is a case-insensitive substring match on `nom_filiere`;
    /// `niveau` is an exact match. Either may be `None` for no filtering.
    pub async fn list_filtered(
        pool: &PgPool,
        search: Option<&str>,
        niveau: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Filiere>, sqlx::Error> {
        let (where_clause, param_idx) = build_filter(search, niveau);
        let query = format!(
            "SELECT {COLUMNS} FROM filiere {where_clause}
             ORDER BY id ASC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Filiere>(&query);
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(niveau) = niveau {
            q = q.bind(niveau);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count filières matching the same filter as [`Self::list_filtered`],
    /// independent of pagination.
    pub async fn count_filtered(
        pool: &PgPool,
        search: Option<&str>,
        niveau: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = build_filter(search, niveau);
        let query = format!("SELECT COUNT(*) FROM filiere {where_clause}");

        let mut q = sqlx::query_as::<_, (i64,)>(&query);
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(niveau) = niveau {
            q = q.bind(niveau);
        }
        let (count,) = q.fetch_one(pool).await?;
        Ok(count)
    }

    /// Update a filière. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFiliere,
    ) -> Result<Option<Filiere>, sqlx::Error> {
        let query = format!(
            "UPDATE filiere SET
                nom_filiere = COALESCE($2, nom_filiere),
                niveau = COALESCE($3, niveau)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filiere>(&query)
            .bind(id)
            .bind(&input.nom_filiere)
            .bind(&input.niveau)
            .fetch_optional(pool)
            .await
    }

    /// Delete a filière. Returns `true` if a row was deleted.
    ///
    /// Callers must check for referencing stagiaires first
    /// (`StagiaireRepo::count_by_filiere`); the FK RESTRICT constraint is
    /// only the backstop.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM filiere WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a filière with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM filiere WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}

/// Build the WHERE clause for the list/count filter pair and return it with
/// the next free bind-parameter index.
fn build_filter(search: Option<&str>, niveau: Option<&str>) -> (String, usize) {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_idx: usize = 1;

    if search.is_some() {
        conditions.push(format!("nom_filiere ILIKE ${param_idx}"));
        param_idx += 1;
    }
    if niveau.is_some() {
        conditions.push(format!("niveau = ${param_idx}"));
        param_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, param_idx)
}
