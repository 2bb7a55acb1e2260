/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Fill in defaults for absent values, then validate
    pub fn from_request(page: Option<u32>, page_size: Option<u32>) -> AppResult<Self> {
        let params = Self::new(page.unwrap_or(1), page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        params.validate()?;
        Ok(params)
    }

    /// Reject pages below 1 and sizes outside `1..=MAX_PAGE_SIZE`
    pub fn validate(&self) -> AppResult<()> {
        if self.page == 0 {
            return Err(AppError::ValidationError(
                "page must be at least 1".to_string(),
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::ValidationError(format!(
                "size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * self.page_size as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = if params.page_size == 0 {
            0
        } else {
            total_count.div_ceil(params.page_size as u64) as u32
        };

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }
}

/// Wire shape of one page: `{items, page, size, total}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T, U: for<'a> From<&'a T>> From<PaginatedResult<T>> for PageResponse<U> {
    fn from(result: PaginatedResult<T>) -> Self {
        Self {
            items: result.items.iter().map(U::from).collect(),
            page: result.page,
            size: result.page_size,
            total: result.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams::new(3, 25);
        assert_eq!(params.offset(), 50);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(PaginationParams::new(1, 1).validate().is_ok());
        assert!(PaginationParams::new(1, MAX_PAGE_SIZE).validate().is_ok());
        assert!(PaginationParams::new(0, 10).validate().is_err());
        assert!(PaginationParams::new(1, 0).validate().is_err());
        assert!(PaginationParams::new(1, MAX_PAGE_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_from_request_defaults() {
        assert_eq!(
            PaginationParams::from_request(None, None).unwrap(),
            PaginationParams::default()
        );
        assert!(PaginationParams::from_request(Some(0), None).is_err());
        assert!(PaginationParams::from_request(None, Some(101)).is_err());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let params = PaginationParams::new(1, 20);
        let result = PaginatedResult::new(vec![1, 2, 3], 41, &params);
        assert_eq!(result.total_pages, 3);

        let empty: PaginatedResult<i32> = PaginatedResult::new(vec![], 0, &params);
        assert_eq!(empty.total_pages, 0);
    }
}
