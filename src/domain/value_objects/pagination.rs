//! Page/page-size value object.

use crate::domain::errors::ValidationError;

/// A zero-based page request.
///
/// Converts a `(page, page_size)` pair into the offset/limit pair used by
/// catalog sources and computes page counts for a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativePage`] when `page < 0` and
    /// [`ValidationError::NonPositivePageSize`] when `page_size <= 0`.
    pub fn new(page: i64, page_size: i64) -> Result<Self, ValidationError> {
        if page < 0 {
            return Err(ValidationError::NegativePage { page });
        }
        if page_size <= 0 {
            return Err(ValidationError::NonPositivePageSize { page_size });
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Number of items preceding this page. Saturates instead of overflowing.
    pub fn skip(&self) -> i64 {
        self.page.saturating_mul(self.page_size)
    }

    /// Maximum number of items on this page.
    pub fn take(&self) -> i64 {
        self.page_size
    }

    /// Number of pages needed for `total_count` items, `0` for none.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            return 0;
        }
        total_count / self.page_size + i64::from(total_count % self.page_size != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pagination() {
        let pagination = Pagination::new(0, 20).unwrap();
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.page_size(), 20);
    }

    #[test]
    fn test_negative_page_rejected() {
        let err = Pagination::new(-1, 20).unwrap_err();
        assert_eq!(err.to_string(), "page must be non-negative");
    }

    #[test]
    fn test_non_positive_page_size_rejected() {
        for page_size in [0, -5] {
            let err = Pagination::new(0, page_size).unwrap_err();
            assert_eq!(err.to_string(), "pageSize must be positive");
        }
    }

    #[test]
    fn test_page_checked_before_page_size() {
        let err = Pagination::new(-1, 0).unwrap_err();
        assert!(matches!(err, ValidationError::NegativePage { page: -1 }));
    }

    #[test]
    fn test_skip() {
        assert_eq!(Pagination::new(0, 20).unwrap().skip(), 0);
        assert_eq!(Pagination::new(1, 20).unwrap().skip(), 20);
        assert_eq!(Pagination::new(2, 10).unwrap().skip(), 20);
        assert_eq!(Pagination::new(5, 10).unwrap().skip(), 50);
    }

    #[test]
    fn test_skip_saturates() {
        assert_eq!(Pagination::new(i64::MAX, 2).unwrap().skip(), i64::MAX);
    }

    #[test]
    fn test_take() {
        assert_eq!(Pagination::new(0, 20).unwrap().take(), 20);
        assert_eq!(Pagination::new(3, 50).unwrap().take(), 50);
    }

    #[test]
    fn test_total_pages() {
        let pagination = Pagination::new(0, 20).unwrap();

        assert_eq!(pagination.total_pages(100), 5);
        assert_eq!(pagination.total_pages(99), 5);
        assert_eq!(pagination.total_pages(101), 6);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(0), 0);
    }

    #[test]
    fn test_total_pages_other_sizes() {
        assert_eq!(Pagination::new(0, 10).unwrap().total_pages(100), 10);
        assert_eq!(Pagination::new(0, 50).unwrap().total_pages(100), 2);
        assert_eq!(Pagination::new(0, 25).unwrap().total_pages(100), 4);
        assert_eq!(Pagination::new(0, 10).unwrap().total_pages(47), 5);
    }

    #[test]
    fn test_total_pages_large_count() {
        let pagination = Pagination::new(0, 10).unwrap();
        assert_eq!(pagination.total_pages(i64::MAX), i64::MAX / 10 + 1);
    }
}
