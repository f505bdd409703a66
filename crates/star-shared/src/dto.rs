//! Request-side parameter types for list queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::response::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, PaginationError};

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A single filter value: string, number or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FilterValue {
    /// Compare against a textual field value the way a query string would.
    pub fn matches_str(&self, value: &str) -> bool {
        match self {
            FilterValue::Text(text) => text.eq_ignore_ascii_case(value),
            FilterValue::Bool(flag) => value.parse::<bool>().is_ok_and(|v| v == *flag),
            FilterValue::Number(number) => value.parse::<f64>().is_ok_and(|v| v == *number),
        }
    }
}

/// Requested page, all fields optional.
///
/// Missing values fall back to page 1 and a page size of 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Resolve defaults and check the page contract.
    pub fn page_request(&self) -> Result<PageRequest, PaginationError> {
        PageRequest::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Search, filter and sort options for list queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl SearchParams {
    /// Trimmed, non-empty free text query.
    pub fn text_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_defaults() {
        let request = PaginationParams::default().page_request().unwrap();
        assert_eq!(request.page(), 1);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_pagination_params_zero_page_size_rejected() {
        let err = PaginationParams::new(1, 0).page_request().unwrap_err();
        assert_eq!(err, PaginationError::InvalidPageSize(0));
    }

    #[test]
    fn test_search_params_wire_shape() {
        let params: SearchParams = serde_json::from_str(
            r#"{"query":"  campus ","sortBy":"views","sortOrder":"asc","filters":{"status":"published","petFriendly":true}}"#,
        )
        .unwrap();

        assert_eq!(params.text_query(), Some("campus"));
        assert_eq!(params.sort_order, Some(SortOrder::Asc));
        assert_eq!(
            params.filters.get("petFriendly"),
            Some(&FilterValue::Bool(true))
        );
        assert!(params.filters["status"].matches_str("PUBLISHED"));
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let params = SearchParams {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.text_query(), None);
    }
}
