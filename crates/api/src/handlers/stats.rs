//! Handler for the `/stats` dashboard aggregate.

use axum::extract::State;
use axum::Json;
use stagium_db::models::stats::Stats;
use stagium_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// Row counts for the three catalog tables. No filtering.
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Stats>> {
    let stats = StatsRepo::counts(&state.pool).await?;
    Ok(Json(stats))
}
