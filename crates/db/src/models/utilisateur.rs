//! Utilisateur (user account) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagium_core::types::{DbId, Timestamp};

/// Full row from the `utilisateur` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UtilisateurView`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Utilisateur {
    pub id: DbId,
    pub login: String,
    pub email: String,
    /// Argon2id PHC hash string.
    pub pwd: String,
    pub role: String,
    pub etat: bool,
    pub avatar: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UtilisateurView {
    pub id: DbId,
    pub login: String,
    pub email: String,
    pub role: String,
    pub etat: bool,
    pub avatar: String,
    pub created_at: Timestamp,
}

impl From<Utilisateur> for UtilisateurView {
    fn from(u: Utilisateur) -> Self {
        UtilisateurView {
            id: u.id,
            login: u.login,
            email: u.email,
            role: u.role,
            etat: u.etat,
            avatar: u.avatar,
            created_at: u.created_at,
        }
    }
}

/// DTO for inserting a new utilisateur. `pwd` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUtilisateur {
    pub login: String,
    pub email: String,
    pub pwd: String,
    pub role: String,
    pub avatar: String,
}

/// DTO for updating an existing utilisateur. All fields are optional;
/// password changes go through `UtilisateurRepo::update_password`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUtilisateur {
    pub login: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub etat: Option<bool>,
}
