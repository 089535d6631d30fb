//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Default page size when the caller does not supply `limit`.
const DEFAULT_LIMIT: i64 = 10;
/// Upper bound on the caller-supplied page size.
const MAX_LIMIT: i64 = 100;

/// Generic 1-indexed pagination parameters (`?page=&limit=`).
///
/// Used by every list handler. Out-of-range values are clamped rather than
/// rejected: `page` floors at 1, `limit` clamps to 1..=100.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    /// The effective 1-indexed page number.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The effective page size.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// The row offset corresponding to [`Self::page`].
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, limit: Option<i64>) -> PaginationParams {
        PaginationParams { page, limit }
    }

    #[test]
    fn test_defaults() {
        let p = params(None, None);
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_offset_is_one_indexed() {
        let p = params(Some(3), Some(20));
        assert_eq!(p.offset(), 40);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(params(Some(0), None).page(), 1);
        assert_eq!(params(Some(-5), None).page(), 1);
        assert_eq!(params(None, Some(0)).limit(), 1);
        assert_eq!(params(None, Some(5000)).limit(), 100);
    }
}
