//! Pagination types

use super::ValidationError;

/// Questions per listing page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination for a requested page.
    ///
    /// Pages are 1-indexed; `0` is rejected.
    pub fn new(page: u32, per_page: u32) -> Result<Self, ValidationError> {
        if page == 0 {
            return Err(ValidationError::InvalidFormat {
                field: "page",
                reason: "must be 1 or greater",
            });
        }
        Ok(Self {
            page,
            per_page: per_page.max(1),
        })
    }

    /// Pagination over the question listing, defaulting to the first page.
    pub fn questions(page: Option<u32>) -> Result<Self, ValidationError> {
        Self::new(page.unwrap_or(1), QUESTIONS_PER_PAGE)
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (u64::from(self.page - 1) * u64::from(self.per_page)) as i64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// One page of results
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    /// A page past the end of the result set has no items.
    pub fn is_out_of_range(&self) -> bool {
        self.items.is_empty()
    }
}
