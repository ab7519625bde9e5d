//! Core domain entities of the product catalog.
//!
//! Entities are immutable once constructed: constructors enforce their
//! invariants and every "change" produces a new value.
//!
//! # Entity Types
//!
//! - [`Promotion`] - A percentage discount with a code label
//! - [`Product`] - A catalog item, optionally associated with a promotion

pub mod product;
pub mod promotion;

pub use product::{PALINDROME_DISCOUNT, PALINDROME_PROMOTION_CODE, Product};
pub use promotion::Promotion;
