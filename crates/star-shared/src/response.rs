//! Response envelopes and pagination normalization.
//!
//! Every payload leaving the data access layer is wrapped in one of these
//! envelopes, whether it was built locally from an in-memory collection or
//! decoded from a remote API that speaks the same contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_STATUS_MESSAGE: &str = "Operation completed successfully";
pub const LOGIN_REQUIRED_MESSAGE: &str = "You must be logged in to perform this action";

/// Pagination contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(u32),

    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u32),
}

/// A checked `(page, page_size)` pair. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }
        if page == 0 {
            return Err(PaginationError::InvalidPage(page));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata carried by list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    /// Derive page counts and navigation flags for a total item count.
    pub fn new(request: PageRequest, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(u64::from(request.page_size));
        Self {
            page: request.page,
            page_size: request.page_size,
            total_pages,
            total_count,
            has_next_page: u64::from(request.page) < total_pages,
            has_previous_page: request.page > 1,
        }
    }
}

/// Paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub code: u16,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub meta: PaginationMeta,
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Slice one page out of a full ordered collection.
    ///
    /// `total_count` overrides `items.len()` when `items` is already a
    /// subset of a larger result. A page past the end yields an empty page.
    pub fn paginate(
        items: Vec<T>,
        page: u32,
        page_size: u32,
        total_count: Option<u64>,
    ) -> Result<Self, PaginationError> {
        let request = PageRequest::new(page, page_size)?;
        Ok(Self::from_request(items, request, total_count))
    }

    /// Same as [`paginate`](Self::paginate) for an already checked request.
    pub fn from_request(items: Vec<T>, request: PageRequest, total_count: Option<u64>) -> Self {
        let total = total_count.unwrap_or(items.len() as u64);
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let data = items
            .into_iter()
            .skip(start)
            .take(request.page_size as usize)
            .collect();

        Self {
            code: 200,
            success: true,
            message: None,
            meta: PaginationMeta::new(request, total),
            data,
        }
    }
}

/// Single item response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::with_code(200, data)
    }

    pub fn created(data: T) -> Self {
        Self::with_code(201, data)
    }

    fn with_code(code: u16, data: T) -> Self {
        Self {
            code,
            success: true,
            message: None,
            meta: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Acknowledgement without a payload, e.g. for deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub code: u16,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            success: true,
            message: Some(message.into()),
        }
    }
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self::ok(DEFAULT_STATUS_MESSAGE)
    }
}

/// Failure envelope: `{code, success: false, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            success: false,
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    pub fn not_found() -> Self {
        Self::new(404, "The requested resource was not found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: u32) -> Vec<u32> {
        (0..n).collect()
    }

    #[test]
    fn test_second_page_of_six() {
        let page = PaginatedResponse::paginate(items(6), 2, 3, None).unwrap();

        assert_eq!(page.data, vec![3, 4, 5]);
        assert_eq!(page.meta.total_pages, 2);
        assert_eq!(page.meta.total_count, 6);
        assert!(!page.meta.has_next_page);
        assert!(page.meta.has_previous_page);
        assert_eq!(page.code, 200);
        assert!(page.success);
    }

    #[test]
    fn test_empty_collection() {
        let page = PaginatedResponse::<u32>::paginate(Vec::new(), 1, 10, None).unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.has_next_page);
        assert!(!page.meta.has_previous_page);
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let err = PaginatedResponse::paginate(items(3), 1, 0, None).unwrap_err();
        assert_eq!(err, PaginationError::InvalidPageSize(0));
    }

    #[test]
    fn test_zero_page_is_invalid() {
        let err = PaginatedResponse::paginate(items(3), 0, 5, None).unwrap_err();
        assert_eq!(err, PaginationError::InvalidPage(0));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = PaginatedResponse::paginate(items(7), 5, 3, None).unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 3);
        assert!(!page.meta.has_next_page);
        assert!(page.meta.has_previous_page);
    }

    #[test]
    fn test_page_far_past_end_does_not_overflow() {
        let page = PaginatedResponse::paginate(items(4), u32::MAX, u32::MAX, None).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_explicit_total_count() {
        let page = PaginatedResponse::paginate(items(4), 1, 2, Some(9)).unwrap();

        assert_eq!(page.data, vec![0, 1]);
        assert_eq!(page.meta.total_count, 9);
        assert_eq!(page.meta.total_pages, 5);
        assert!(page.meta.has_next_page);
    }

    #[test]
    fn test_slice_length_matches_formula() {
        for len in 0..12u32 {
            for page_size in 1..5u32 {
                for page in 1..6u32 {
                    let result = PaginatedResponse::paginate(items(len), page, page_size, None)
                        .unwrap();
                    let start = i64::from((page - 1) * page_size);
                    let expected = (i64::from(len) - start).clamp(0, i64::from(page_size));
                    assert_eq!(result.data.len() as i64, expected);
                    assert_eq!(
                        result.meta.total_pages,
                        u64::from(len.div_ceil(page_size))
                    );
                    assert_eq!(
                        result.meta.has_next_page,
                        u64::from(page) < result.meta.total_pages
                    );
                    assert_eq!(result.meta.has_previous_page, page > 1);
                    if let Some(first) = result.data.first() {
                        assert_eq!(i64::from(*first), start);
                    }
                }
            }
        }
    }

    #[test]
    fn test_paginate_is_deterministic() {
        let first = PaginatedResponse::paginate(items(10), 2, 4, None).unwrap();
        let second = PaginatedResponse::paginate(items(10), 2, 4, None).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_paginated_wire_shape() {
        let page = PaginatedResponse::paginate(vec!["a"], 1, 10, None).unwrap();
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "code": 200,
                "success": true,
                "meta": {
                    "page": 1,
                    "pageSize": 10,
                    "totalPages": 1,
                    "totalCount": 1,
                    "hasNextPage": false,
                    "hasPreviousPage": false
                },
                "data": ["a"]
            })
        );
    }

    #[test]
    fn test_api_response_meta() {
        let response = ApiResponse::ok(1)
            .with_meta("requestId", "req-1")
            .with_message("done");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["meta"]["requestId"], "req-1");
        assert_eq!(json["message"], "done");
        assert_eq!(json["data"], 1);
    }

    #[test]
    fn test_status_response_default_message() {
        let status = StatusResponse::default();
        assert!(status.success);
        assert_eq!(status.message.as_deref(), Some(DEFAULT_STATUS_MESSAGE));
    }

    #[test]
    fn test_error_response_is_failure() {
        let error = ErrorResponse::not_found();
        assert_eq!(error.code, 404);
        assert!(!error.success);
    }
}
