//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into use case calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request parameters and health check payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting, CORS, and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
