//! Repository for the `utilisateur` table.

use sqlx::PgPool;
use stagium_core::types::DbId;

use crate::models::utilisateur::{CreateUtilisateur, UpdateUtilisateur, Utilisateur};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, login, email, pwd, role, etat, avatar, created_at";

/// Provides CRUD operations for utilisateurs.
pub struct UtilisateurRepo;

impl UtilisateurRepo {
    /// Insert a new utilisateur, returning the created row.
    ///
    /// `input.pwd` must already be an Argon2id hash; `etat` defaults to
    /// `true` at the schema level.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUtilisateur,
    ) -> Result<Utilisateur, sqlx::Error> {
        let query = format!(
            "INSERT INTO utilisateur (login, email, pwd, role, avatar)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Utilisateur>(&query)
            .bind(&input.login)
            .bind(&input.email)
            .bind(&input.pwd)
            .bind(&input.role)
            .bind(&input.avatar)
            .fetch_one(pool)
            .await
    }

    /// Find a utilisateur by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Utilisateur>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM utilisateur WHERE id = $1");
        sqlx::query_as::<_, Utilisateur>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a utilisateur by login (case-sensitive).
    pub async fn find_by_login(
        pool: &PgPool,
        login: &str,
    ) -> Result<Option<Utilisateur>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM utilisateur WHERE login = $1");
        sqlx::query_as::<_, Utilisateur>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }

    /// List utilisateurs matching the filter, ordered by id ascending.
    ///
    /// `search` is a case-insensitive substring match on `login`;
    /// `role` and `etat` are exact matches.
    pub async fn list_filtered(
        pool: &PgPool,
        search: Option<&str>,
        role: Option<&str>,
        etat: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Utilisateur>, sqlx::Error> {
        let (where_clause, param_idx) = build_filter(search, role, etat);
        let query = format!(
            "SELECT {COLUMNS} FROM utilisateur {where_clause}
             ORDER BY id ASC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Utilisateur>(&query);
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(role) = role {
            q = q.bind(role);
        }
        if let Some(etat) = etat {
            q = q.bind(etat);
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count utilisateurs matching the same filter as [`Self::list_filtered`].
    pub async fn count_filtered(
        pool: &PgPool,
        search: Option<&str>,
        role: Option<&str>,
        etat: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = build_filter(search, role, etat);
        let query = format!("SELECT COUNT(*) FROM utilisateur {where_clause}");

        let mut q = sqlx::query_as::<_, (i64,)>(&query);
        if let Some(search) = search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(role) = role {
            q = q.bind(role);
        }
        if let Some(etat) = etat {
            q = q.bind(etat);
        }
        let (count,) = q.fetch_one(pool).await?;
        Ok(count)
    }

    /// Update a utilisateur. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUtilisateur,
    ) -> Result<Option<Utilisateur>, sqlx::Error> {
        let query = format!(
            "UPDATE utilisateur SET
                login = COALESCE($2, login),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                etat = COALESCE($5, etat)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Utilisateur>(&query)
            .bind(id)
            .bind(&input.login)
            .bind(&input.email)
            .bind(&input.role)
            .bind(input.etat)
            .fetch_optional(pool)
            .await
    }

    /// Replace a utilisateur's password hash. Returns `true` if the row
    /// was updated.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        pwd: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE utilisateur SET pwd = $2 WHERE id = $1")
            .bind(id)
            .bind(pwd)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a utilisateur. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM utilisateur WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of accounts, active or not. Used by the startup
    /// bootstrap to detect an empty install.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM utilisateur")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

/// Build the WHERE clause for the list/count filter pair and return it with
/// the next free bind-parameter index.
fn build_filter(search: Option<&str>, role: Option<&str>, etat: Option<bool>) -> (String, usize) {
    let mut conditions: Vec<String> = Vec::new();
    let mut param_idx: usize = 1;

    if search.is_some() {
        conditions.push(format!("login ILIKE ${param_idx}"));
        param_idx += 1;
    }
    if role.is_some() {
        conditions.push(format!("role = ${param_idx}"));
        param_idx += 1;
    }
    if etat.is_some() {
        conditions.push(format!("etat = ${param_idx}"));
        param_idx += 1;
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, param_idx)
}
