//! First-run bootstrap.
//!
//! A fresh install has no accounts, so nothing could ever log in to create
//! one. On startup, an empty `utilisateur` table gets seeded with a single
//! ADMIN account.

use stagium_core::placeholder::default_image;
use stagium_core::roles::ROLE_ADMIN;
use stagium_db::models::utilisateur::CreateUtilisateur;
use stagium_db::repositories::UtilisateurRepo;
use stagium_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Login of the seeded account.
const BOOTSTRAP_LOGIN: &str = "admin";
/// Password used when `ADMIN_INITIAL_PASSWORD` is not set.
const DEFAULT_PASSWORD: &str = "admin123";

/// Seed an initial ADMIN account if the `utilisateur` table is empty.
///
/// The password comes from `ADMIN_INITIAL_PASSWORD`; falling back to the
/// built-in default logs a warning telling the operator to change it.
pub async fn ensure_admin_account(pool: &DbPool) -> AppResult<()> {
    let count = UtilisateurRepo::count_all(pool).await?;
    if count > 0 {
        return Ok(());
    }

    let password = match std::env::var("ADMIN_INITIAL_PASSWORD") {
        Ok(p) if !p.is_empty() => p,
        _ => {
            tracing::warn!(
                login = BOOTSTRAP_LOGIN,
                "Seeding initial admin with the default password; change it via the profile endpoint"
            );
            DEFAULT_PASSWORD.to_string()
        }
    };

    let pwd = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUtilisateur {
        login: BOOTSTRAP_LOGIN.to_string(),
        email: "admin@stagium.local".to_string(),
        pwd,
        role: ROLE_ADMIN.to_string(),
        avatar: default_image(BOOTSTRAP_LOGIN),
    };
    let user = UtilisateurRepo::create(pool, &input).await?;
    tracing::info!(user_id = user.id, login = %user.login, "Seeded initial admin account");

    Ok(())
}
