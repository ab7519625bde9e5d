//! Value objects describing a search request.
//!
//! - [`SearchQuery`] - The raw search text and its palindrome check
//! - [`Pagination`] - Offset/limit math for a zero-based page

pub mod pagination;
pub mod search_query;

pub use pagination::Pagination;
pub use search_query::SearchQuery;
