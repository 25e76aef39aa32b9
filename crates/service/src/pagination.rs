//! Pagination utilities for service layer
//!
//! `PageRequest` validates 1-based page inputs; `Page` is the list envelope
//! returned to clients.

use serde::Serialize;

use crate::errors::ServiceError;

/// Bounds applied to caller-supplied page sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self { Self { default_page_size: 10, max_page_size: 100 } }
}

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub page_size: u64,
}

impl PageRequest {
    /// Apply defaults (page 1, `limits.default_page_size`) and reject out-of-range values.
    pub fn new(page: Option<u64>, page_size: Option<u64>, limits: PageLimits) -> Result<Self, ServiceError> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(limits.default_page_size);
        if page == 0 {
            return Err(ServiceError::Validation("page must be >= 1".into()));
        }
        if page_size == 0 || page_size > limits.max_page_size {
            return Err(ServiceError::Validation(format!(
                "pageSize must be between 1 and {}",
                limits.max_page_size
            )));
        }
        // the store binds OFFSET as a signed 64-bit integer
        let offset_fits = (page - 1)
            .checked_mul(page_size)
            .is_some_and(|o| i64::try_from(o).is_ok());
        if !offset_fits {
            return Err(ServiceError::Validation("page is out of range".into()));
        }
        Ok(Self { page, page_size })
    }

    /// Rows to skip: `(page - 1) * page_size`.
    pub fn offset(self) -> u64 { (self.page - 1).saturating_mul(self.page_size) }

    pub fn limit(self) -> u64 { self.page_size }
}

/// `ceil(total / page_size)`; zero when there is nothing to page.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 { 0 } else { total.div_ceil(page_size) }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total_count: u64, req: PageRequest) -> Self {
        Self {
            total_count,
            total_pages: total_pages(total_count, req.page_size),
            current_page: req.page,
            page_size: req.page_size,
            data,
        }
    }
}
