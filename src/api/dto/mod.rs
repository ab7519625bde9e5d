//! Data Transfer Objects for API requests and responses.
//!
//! Response bodies for products are the application projections in
//! [`crate::application::dto`]; this module holds what is specific to HTTP.

pub mod health;
pub mod search;
