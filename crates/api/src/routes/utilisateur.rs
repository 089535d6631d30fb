//! Route definitions for utilisateurs.

use axum::routing::get;
use axum::Router;

use crate::handlers::utilisateur;
use crate::state::AppState;

/// Routes mounted at `/utilisateurs`.
///
/// All routes require the `ADMIN` role (enforced by handler extractors).
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(utilisateur::list).post(utilisateur::create))
        .route(
            "/{id}",
            get(utilisateur::get)
                .put(utilisateur::update)
                .delete(utilisateur::delete),
        )
}
