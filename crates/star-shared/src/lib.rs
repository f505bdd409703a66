//! # Star Shared
//!
//! Wire types shared by the forum backend, its gateway and any remote API
//! speaking the same contract: query parameters and response envelopes.

pub mod dto;
pub mod response;

pub use dto::{FilterValue, PaginationParams, SearchParams, SortOrder};
pub use response::{
    ApiResponse, ErrorResponse, LOGIN_REQUIRED_MESSAGE, PageRequest, PaginatedResponse,
    PaginationError, PaginationMeta, StatusResponse,
};
