//! Domain layer containing the catalog pricing and search model.
//!
//! Everything here is free of I/O: values are validated at construction,
//! immutable afterwards, and safe to share across concurrent requests.
//!
//! # Architecture
//!
//! - [`entities`] - [`entities::Product`] and [`entities::Promotion`]
//! - [`value_objects`] - [`value_objects::SearchQuery`] and [`value_objects::Pagination`]
//! - [`errors`] - [`errors::ValidationError`] raised by constructors
//! - [`repositories`] - The catalog source contract implemented by infrastructure
//!
//! # Palindrome Discount
//!
//! When the search term is a palindrome, every product on the returned page
//! is offered at 50% off unless it already carries an equal or better
//! promotion (see [`entities::Product::apply_palindrome_discount`]).

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;
