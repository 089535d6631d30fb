//! Well-known role name constants.
//!
//! These must match the CHECK constraint in
//! `20260301000003_create_utilisateur_table.sql`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_VISITEUR: &str = "VISITEUR";

/// All assignable roles.
pub const ROLES: [&str; 2] = [ROLE_ADMIN, ROLE_VISITEUR];

/// Whether `role` is one of the assignable role names.
pub fn is_valid_role(role: &str) -> bool {
    ROLES.contains(&role)
}
