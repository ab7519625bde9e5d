//! Infrastructure layer for external integrations.
//!
//! Implements the catalog source contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory product repositories
//! - [`seed`] - Demo catalog data and database seeding

pub mod persistence;
pub mod seed;
