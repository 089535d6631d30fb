//! Domain vocabulary shared by the db and api crates.
//!
//! No I/O lives here: only the error taxonomy, id/timestamp aliases, and
//! the fixed value sets (roles, niveaux, civilités, placeholder images)
//! that the rest of the workspace validates against.

pub mod civilite;
pub mod error;
pub mod niveau;
pub mod placeholder;
pub mod roles;
pub mod types;
