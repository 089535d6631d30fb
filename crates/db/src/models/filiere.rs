//! Filière (track) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagium_core::types::{DbId, Timestamp};

/// A row from the `filiere` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Filiere {
    pub id: DbId,
    pub nom_filiere: String,
    /// One of the levels in `stagium_core::niveau` (CHECK-constrained).
    pub niveau: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new filière.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFiliere {
    pub nom_filiere: String,
    pub niveau: String,
}

/// DTO for updating an existing filière. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFiliere {
    pub nom_filiere: Option<String>,
    pub niveau: Option<String>,
}
