//! Civilité (gender marker) constants.
//!
//! Only used to pick a default placeholder photo; must match the CHECK
//! constraint in `20260301000002_create_stagiaire_table.sql`.

pub const CIVILITE_M: &str = "M";
pub const CIVILITE_F: &str = "F";

/// All valid civilité markers.
pub const CIVILITES: [&str; 2] = [CIVILITE_M, CIVILITE_F];

/// Whether `civilite` is one of the valid markers.
pub fn is_valid_civilite(civilite: &str) -> bool {
    CIVILITES.contains(&civilite)
}
