//! Pagination utilities for trakt API responses.
//!
//! trakt reports pagination in `X-Pagination-*` response headers rather than
//! in the body.

use serde::{Deserialize, Serialize};

use crate::transport::ApiResponse;

pub const HEADER_PAGINATION_PAGE: &str = "x-pagination-page";
pub const HEADER_PAGINATION_LIMIT: &str = "x-pagination-limit";
pub const HEADER_PAGINATION_PAGE_COUNT: &str = "x-pagination-page-count";
pub const HEADER_PAGINATION_ITEM_COUNT: &str = "x-pagination-item-count";

/// A page of results from the trakt API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages (if known).
    pub total: Option<u64>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub limit: u32,
    /// Total number of pages (if known).
    pub page_count: Option<u32>,
    /// Whether there are more pages.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a new page from items and pagination info.
    #[must_use]
    pub fn new(items: Vec<T>, page: u32, limit: u32, total: Option<u64>) -> Self {
        let has_more = match total {
            Some(t) => (u64::from(page) * u64::from(limit)) < t,
            None => items.len() >= limit as usize,
        };
        Self {
            items,
            total,
            page,
            limit,
            page_count: None,
            has_more,
        }
    }

    /// Build a page from the pagination headers of `response`.
    ///
    /// Falls back to the requested page and limit when the service omits the
    /// headers or sends values out of range.
    #[must_use]
    pub fn from_response(items: Vec<T>, response: &ApiResponse, requested: PaginationParams) -> Self {
        let page = response
            .header_u64(HEADER_PAGINATION_PAGE)
            .and_then(|p| u32::try_from(p).ok())
            .or(requested.page)
            .unwrap_or(1);
        let limit = response
            .header_u64(HEADER_PAGINATION_LIMIT)
            .and_then(|l| u32::try_from(l).ok())
            .or(requested.limit)
            .unwrap_or(DEFAULT_LIMIT);
        let total = response.header_u64(HEADER_PAGINATION_ITEM_COUNT);
        let mut result = Self::new(items, page, limit, total);
        result.page_count = response
            .header_u64(HEADER_PAGINATION_PAGE_COUNT)
            .and_then(|c| u32::try_from(c).ok());
        result
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// trakt's page size when none is requested.
pub const DEFAULT_LIMIT: u32 = 10;

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn for_page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    fn response_with_headers(pairs: &[(&'static str, &str)]) -> ApiResponse {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, value.parse().unwrap());
        }
        ApiResponse {
            status: StatusCode::OK,
            headers,
            body: "[]".to_string(),
        }
    }

    #[test]
    fn test_page_has_more_with_total() {
        let page: Page<i32> = Page::new(vec![1; 10], 1, 10, Some(25));
        assert!(page.has_more);

        let page: Page<i32> = Page::new(vec![1; 5], 3, 10, Some(25));
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_has_more_without_total() {
        let page: Page<i32> = Page::new(vec![1; 10], 1, 10, None);
        assert!(page.has_more);

        let page: Page<i32> = Page::new(vec![1; 4], 1, 10, None);
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_from_headers() {
        let response = response_with_headers(&[
            (HEADER_PAGINATION_PAGE, "2"),
            (HEADER_PAGINATION_LIMIT, "3"),
            (HEADER_PAGINATION_PAGE_COUNT, "4"),
            (HEADER_PAGINATION_ITEM_COUNT, "11"),
        ]);
        let page = Page::from_response(vec!["a", "b", "c"], &response, PaginationParams::default());
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 3);
        assert_eq!(page.total, Some(11));
        assert_eq!(page.page_count, Some(4));
        assert!(page.has_more);
    }

    #[test]
    fn test_page_without_headers_uses_request() {
        let response = response_with_headers(&[]);
        let page = Page::from_response(vec![1, 2], &response, PaginationParams::for_page(4, 5));
        assert_eq!(page.page, 4);
        assert_eq!(page.limit, 5);
        assert_eq!(page.total, None);
        assert_eq!(page.page_count, None);
        assert!(!page.has_more);
    }

    #[test]
    fn test_out_of_range_headers_fall_back_to_request() {
        let response = response_with_headers(&[
            (HEADER_PAGINATION_PAGE, "4294967297"),
            (HEADER_PAGINATION_LIMIT, "99999999999"),
            (HEADER_PAGINATION_PAGE_COUNT, "4294967296"),
        ]);
        let page = Page::from_response(vec![1, 2], &response, PaginationParams::for_page(3, 20));
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 20);
        assert_eq!(page.page_count, None);
    }
}
