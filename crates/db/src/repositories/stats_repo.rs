//! Aggregate counts across the catalog tables.

use sqlx::PgPool;

use crate::models::stats::Stats;

pub struct StatsRepo;

impl StatsRepo {
    /// Count rows in each of the three tables. No filtering.
    pub async fn counts(pool: &PgPool) -> Result<Stats, sqlx::Error> {
        let (stagiaires,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stagiaire")
            .fetch_one(pool)
            .await?;
        let (filieres,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM filiere")
            .fetch_one(pool)
            .await?;
        let (utilisateurs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM utilisateur")
            .fetch_one(pool)
            .await?;

        Ok(Stats {
            stagiaires,
            filieres,
            utilisateurs,
        })
    }
}
