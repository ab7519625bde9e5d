//! Application layer orchestrating domain values and the catalog source.
//!
//! # Available Use Cases
//!
//! - [`use_cases::SearchProductsUseCase`] - Paginated search with the palindrome rule
//! - [`use_cases::GetProductUseCase`] - Single product lookup
//!
//! Use cases return the projections defined in [`dto`], which the HTTP
//! layer serializes unchanged.

pub mod dto;
pub mod use_cases;
