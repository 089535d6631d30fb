//! Stagiaire (trainee) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagium_core::types::{DbId, Timestamp};

/// A row from the `stagiaire` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stagiaire {
    pub id: DbId,
    pub nom: String,
    pub prenom: String,
    /// `"M"` or `"F"` (CHECK-constrained).
    pub civilite: String,
    pub photo: String,
    pub id_filiere: DbId,
    pub created_at: Timestamp,
}

/// The resolved filière embedded in stagiaire reads.
#[derive(Debug, Clone, Serialize)]
pub struct FiliereRef {
    pub id: DbId,
    pub nom_filiere: String,
    pub niveau: String,
}

/// A stagiaire with its filière resolved, as returned by list and get.
#[derive(Debug, Clone, Serialize)]
pub struct StagiaireWithFiliere {
    pub id: DbId,
    pub nom: String,
    pub prenom: String,
    pub civilite: String,
    pub photo: String,
    pub id_filiere: DbId,
    pub created_at: Timestamp,
    pub filiere: FiliereRef,
}

/// DTO for creating a new stagiaire.
///
/// `photo` is optional; the handler fills in a placeholder file when unset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStagiaire {
    pub nom: String,
    pub prenom: String,
    pub civilite: String,
    pub id_filiere: DbId,
    pub photo: Option<String>,
}

/// DTO for updating an existing stagiaire. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStagiaire {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub civilite: Option<String>,
    pub id_filiere: Option<DbId>,
    pub photo: Option<String>,
}
