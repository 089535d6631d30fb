//! Aggregate counts across the three catalog tables.

use serde::Serialize;

/// Entity counts shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub stagiaires: i64,
    pub filieres: i64,
    pub utilisateurs: i64,
}
