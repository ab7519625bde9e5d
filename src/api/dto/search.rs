//! Query parameters for product search.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::use_cases::{DEFAULT_PAGE_SIZE, SearchProductsInput};

/// Longest accepted search text, in characters.
pub const MAX_QUERY_LENGTH: u64 = 200;

/// `GET /api/products` query string.
///
/// Page numbers are parsed with `serde_with` so they arrive as integers;
/// range checks are left to the use case. `page_size` is accepted as an
/// alias of `pageSize`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    #[validate(length(max = MAX_QUERY_LENGTH, message = "query must be at most 200 characters"))]
    pub query: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, alias = "page_size")]
    pub page_size: Option<i64>,
}

impl SearchParams {
    /// Fills in defaults: empty query, page 0, [`DEFAULT_PAGE_SIZE`].
    pub fn into_input(self) -> SearchProductsInput {
        SearchProductsInput {
            query: self.query.unwrap_or_default(),
            page: self.page.unwrap_or(0),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> SearchParams {
        let uri: axum::http::Uri = format!("/api/products?{query}").parse().unwrap();
        axum::extract::Query::<SearchParams>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn test_defaults() {
        let input = parse("").into_input();
        assert_eq!(input, SearchProductsInput::default());
    }

    #[test]
    fn test_camel_case_page_size() {
        let input = parse("query=radar&page=2&pageSize=5").into_input();
        assert_eq!(input.query, "radar");
        assert_eq!(input.page, 2);
        assert_eq!(input.page_size, 5);
    }

    #[test]
    fn test_snake_case_alias() {
        let input = parse("page_size=7").into_input();
        assert_eq!(input.page_size, 7);
    }

    #[test]
    fn test_negative_values_pass_through() {
        let input = parse("page=-1&pageSize=0").into_input();
        assert_eq!(input.page, -1);
        assert_eq!(input.page_size, 0);
    }

    #[test]
    fn test_query_length_limit() {
        let at_limit = SearchParams {
            query: Some("a".repeat(MAX_QUERY_LENGTH as usize)),
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let too_long = SearchParams {
            query: Some("a".repeat(MAX_QUERY_LENGTH as usize + 1)),
            ..Default::default()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_non_numeric_page_is_rejected() {
        let uri: axum::http::Uri = "/api/products?page=abc".parse().unwrap();
        assert!(axum::extract::Query::<SearchParams>::try_from_uri(&uri).is_err());
    }
}
