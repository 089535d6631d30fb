//! Route definitions for stagiaires.

use axum::routing::get;
use axum::Router;

use crate::handlers::stagiaire;
use crate::state::AppState;

/// Routes mounted at `/stagiaires`.
///
/// ```text
/// GET    /       -> list (filière embedded)
/// POST   /       -> create
/// GET    /{id}   -> get (filière embedded)
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stagiaire::list).post(stagiaire::create))
        .route(
            "/{id}",
            get(stagiaire::get)
                .put(stagiaire::update)
                .delete(stagiaire::delete),
        )
}
