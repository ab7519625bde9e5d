//! Use cases exposed to the transport layer.

pub mod get_product;
pub mod search_products;

pub use get_product::GetProductUseCase;
pub use search_products::{DEFAULT_PAGE_SIZE, SearchProductsInput, SearchProductsUseCase};
