//! Pagination policy shared by the paginated read operations
//!
//! All paginated endpoints go through the same pure arithmetic: clamp the
//! caller-supplied page and limit, derive a zero-based offset, and compute
//! a [`Pagination`] summary from the live total reported by the source.
//!
//! # Example
//!
//! ```rust
//! use blog_api::pagination::{build_pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
//!
//! let (limit, offset, pagination) =
//!     build_pagination(2, 150, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, 200);
//!
//! assert_eq!(limit, 100);
//! assert_eq!(offset, 100);
//! assert_eq!(pagination.total_pages, 2);
//! ```

/// Default page size for general article listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for general article listings
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default item count for the fixed-size top-N listings (popular, latest)
pub const DEFAULT_TOP_N: i64 = 5;

/// Maximum item count for the fixed-size top-N listings (popular, latest)
pub const MAX_TOP_N: i64 = 20;

/// Pagination metadata attached to list responses
///
/// Derived on every call from the live total; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of items across all pages
    pub total: i64,
    /// Current page number (1-based)
    pub page: i64,
    /// Page size
    pub limit: i64,
    /// Total number of pages (0 when total or limit is not positive)
    pub total_pages: i64,
}

impl Pagination {
    /// Build a pagination summary, clamping `page` to 1 and defaulting a
    /// non-positive `limit` to [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let page = page.max(1);
        let limit = if limit <= 0 { DEFAULT_PAGE_SIZE } else { limit };

        Self {
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}

/// Clamp a requested limit into `(0, max]`, falling back to `default`
/// for non-positive requests.
#[must_use]
pub fn clamp_limit(limit: i64, default: i64, max: i64) -> i64 {
    if limit <= 0 {
        return default;
    }
    if limit > max {
        return max;
    }
    limit
}

/// Convert a 1-based page number to a zero-based offset.
///
/// Saturates instead of overflowing, so arbitrarily large page numbers
/// from the query string stay within `i64`.
#[must_use]
pub fn page_to_offset(page: i64, limit: i64) -> i64 {
    let page = page.max(1);
    page.saturating_sub(1).saturating_mul(limit)
}

/// Total page count: `ceil(total / limit)`, or 0 when either is not positive.
#[must_use]
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    total.saturating_add(limit - 1) / limit
}

/// Validate page and limit and derive everything a paginated operation needs.
///
/// Returns the clamped limit, the zero-based offset, and the [`Pagination`]
/// summary. Pure and total: no error path, identical inputs always yield
/// identical outputs.
#[must_use]
pub fn build_pagination(
    page: i64,
    limit: i64,
    default_limit: i64,
    max_limit: i64,
    total: i64,
) -> (i64, i64, Pagination) {
    let page = page.max(1);
    let limit = clamp_limit(limit, default_limit, max_limit);

    let offset = page_to_offset(page, limit);
    let pagination = Pagination::new(total, page, limit);

    (limit, offset, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_in_range() {
        assert_eq!(clamp_limit(10, 10, 100), 10);
        assert_eq!(clamp_limit(1, 10, 100), 1);
        assert_eq!(clamp_limit(100, 10, 100), 100);
    }

    #[test]
    fn test_clamp_limit_non_positive_uses_default() {
        assert_eq!(clamp_limit(0, 10, 100), 10);
        assert_eq!(clamp_limit(-5, 10, 100), 10);
        assert_eq!(clamp_limit(0, 5, 20), 5);
    }

    #[test]
    fn test_clamp_limit_above_max() {
        assert_eq!(clamp_limit(150, 10, 100), 100);
        assert_eq!(clamp_limit(21, 5, 20), 20);
    }

    #[test]
    fn test_page_to_offset() {
        assert_eq!(page_to_offset(1, 10), 0);
        assert_eq!(page_to_offset(2, 10), 10);
        assert_eq!(page_to_offset(3, 25), 50);
    }

    #[test]
    fn test_page_to_offset_clamps_page() {
        assert_eq!(page_to_offset(0, 10), 0);
        assert_eq!(page_to_offset(-3, 10), 0);
    }

    #[test]
    fn test_page_to_offset_saturates_on_huge_page() {
        assert_eq!(page_to_offset(i64::MAX, 10), i64::MAX);
        assert_eq!(page_to_offset(i64::MAX, 1), i64::MAX - 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_total_pages_degenerate_inputs() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(-1, 10), 0);
        assert_eq!(total_pages(25, 0), 0);
        assert_eq!(total_pages(25, -1), 0);
    }

    #[test]
    fn test_build_pagination_defaults() {
        // page=0, limit=0 with a total of 25 items
        let (limit, offset, pagination) = build_pagination(0, 0, 10, 100, 25);

        assert_eq!(limit, 10);
        assert_eq!(offset, 0);
        assert_eq!(
            pagination,
            Pagination {
                total: 25,
                page: 1,
                limit: 10,
                total_pages: 3,
            }
        );
    }

    #[test]
    fn test_build_pagination_clamps_oversized_limit() {
        let (limit, offset, pagination) = build_pagination(2, 150, 10, 100, 200);

        assert_eq!(limit, 100);
        assert_eq!(offset, 100);
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.total_pages, 2);
    }

    #[test]
    fn test_build_pagination_zero_total() {
        let (limit, offset, pagination) = build_pagination(1, 10, 10, 100, 0);

        assert_eq!(limit, 10);
        assert_eq!(offset, 0);
        assert_eq!(pagination.total, 0);
        assert_eq!(pagination.total_pages, 0);
    }

    #[test]
    fn test_build_pagination_saturates_on_huge_page() {
        // A hostile page value straight from the query string must not
        // overflow the offset arithmetic
        let (limit, offset, pagination) = build_pagination(i64::MAX, 10, 10, 100, 25);

        assert_eq!(limit, 10);
        assert_eq!(offset, i64::MAX);
        assert_eq!(pagination.page, i64::MAX);
        assert_eq!(pagination.total_pages, 3);
    }

    #[test]
    fn test_total_pages_saturates_on_huge_total() {
        assert_eq!(total_pages(i64::MAX, 10), i64::MAX / 10);
    }

    #[test]
    fn test_build_pagination_is_deterministic() {
        let first = build_pagination(3, 7, 10, 100, 42);
        let second = build_pagination(3, 7, 10, 100, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pagination_new_clamps_inputs() {
        let pagination = Pagination::new(50, 0, -1);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(pagination.total_pages, 5);
    }
}
