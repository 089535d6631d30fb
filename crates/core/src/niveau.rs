//! Track level (niveau) constants.
//!
//! These must match the CHECK constraint in
//! `20260301000001_create_filiere_table.sql`. The three levels mirror the
//! OFPPT training ladder and are stored verbatim, accents included.

pub const NIVEAU_QUALIFICATION: &str = "Qualification";
pub const NIVEAU_TECHNICIEN: &str = "Technicien";
pub const NIVEAU_TECHNICIEN_SPECIALISE: &str = "Technicien Spécialisé";

/// All valid track levels.
pub const NIVEAUX: [&str; 3] = [
    NIVEAU_QUALIFICATION,
    NIVEAU_TECHNICIEN,
    NIVEAU_TECHNICIEN_SPECIALISE,
];

/// Whether `niveau` is one of the valid track levels.
pub fn is_valid_niveau(niveau: &str) -> bool {
    NIVEAUX.contains(&niveau)
}
