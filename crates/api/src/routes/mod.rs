pub mod auth;
pub mod filiere;
pub mod health;
pub mod profile;
pub mod stagiaire;
pub mod stats;
pub mod utilisateur;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
///
/// /filieres                   list, create
/// /filieres/{id}              get, update, delete
///
/// /stagiaires                 list, create
/// /stagiaires/{id}            get, update, delete
///
/// /utilisateurs               list, create (admin only)
/// /utilisateurs/{id}          get, update, delete (admin only)
///
/// /profile                    get, update own account
///
/// /stats                      entity counts
/// ```
///
/// Reads require authentication; writes require the ADMIN role. Both are
/// enforced by handler extractors, not here.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/filieres", filiere::router())
        .nest("/stagiaires", stagiaire::router())
        .nest("/utilisateurs", utilisateur::router())
        .nest("/profile", profile::router())
        .nest("/stats", stats::router())
}
