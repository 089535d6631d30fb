//! Route definitions for filières.

use axum::routing::get;
use axum::Router;

use crate::handlers::filiere;
use crate::state::AppState;

/// Routes mounted at `/filieres`.
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
        .route("/", get(filiere::list).post(filiere::create))
        .route(
            "/{id}",
            get(filiere::get)
                .put(filiere::update)
                .delete(filiere::delete),
        )
}
