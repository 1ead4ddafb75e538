//! Offset/limit pagination parameters shared by list queries.

use serde::{Deserialize, Serialize};

/// Page size used when a route does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Row offset for the page, clamping page 0 to page 1. The page number
    /// comes from the query string, so the arithmetic saturates instead of
    /// overflowing on absurd values.
    pub fn offset(&self) -> i64 {
        let offset = self.page.max(1).saturating_sub(1).saturating_mul(self.per_page);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        let p = Pagination::new(1, 25);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 25);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        assert_eq!(Pagination::new(0, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let p = Pagination::new(usize::MAX, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(p.offset(), i64::MAX);
        assert_eq!(p.limit(), DEFAULT_ITEMS_PER_PAGE as i64);
    }
}
