//! Shared response envelope types for API handlers.
//!
//! List endpoints use the `{ "data": [...], "total": N, "page": P,
//! "limit": L }` envelope; `total` counts all rows matching the filter so
//! clients can compute `ceil(total / limit)` pages. Use these instead of
//! ad-hoc `serde_json::json!` to get compile-time type safety.

use serde::Serialize;

/// Standard paginated list envelope.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Confirmation payload for deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
