//! Output projections returned by the use cases.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Product, Promotion};

/// Promotion details embedded in a [`ProductView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionSummary {
    pub id: i64,
    pub code: String,
    pub discount: i32,
}

impl From<&Promotion> for PromotionSummary {
    fn from(promotion: &Promotion) -> Self {
        Self {
            id: promotion.id(),
            code: promotion.code().to_string(),
            discount: promotion.discount(),
        }
    }
}

/// Product as presented to shoppers, with its computed final price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub final_price: f64,
    pub is_palindrome_discount: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionSummary>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            title: product.title().to_string(),
            description: product.description().map(str::to_string),
            price: product.price(),
            image_url: product.image_url().map(str::to_string),
            final_price: product.final_price(),
            is_palindrome_discount: product.is_palindrome_discount(),
            promotion: product.promotion().map(PromotionSummary::from),
        }
    }
}

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProductsOutput {
    pub products: Vec<ProductView>,
    pub total_pages: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub total_count: i64,
}
