//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Product, Promotion};
use crate::domain::errors::ValidationError;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Columns selected for every product lookup.
const PRODUCT_COLUMNS: &str = r#"
    p.id,
    p.title,
    p.description,
    p.price::FLOAT8 AS price,
    p.image_url,
    pr.id AS promotion_id,
    pr.code AS promotion_code,
    pr.discount AS promotion_discount
"#;

/// Product row joined with its optional promotion.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    description: Option<String>,
    price: f64,
    image_url: Option<String>,
    promotion_id: Option<i64>,
    promotion_code: Option<String>,
    promotion_discount: Option<i32>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ValidationError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let promotion = match (row.promotion_id, row.promotion_code, row.promotion_discount) {
            (Some(id), Some(code), Some(discount)) => Some(Promotion::new(id, code, discount)?),
            _ => None,
        };

        Product::new(
            row.id,
            row.title,
            row.description,
            row.price,
            row.image_url,
            promotion,
        )
    }
}

/// Converts a row, reporting invariant violations as data source failures.
fn to_domain(row: ProductRow) -> Result<Product, AppError> {
    let id = row.id;
    Product::try_from(row).map_err(|e| {
        tracing::error!(product_id = id, error = %e, "Invalid product row in catalog");
        AppError::internal(
            "Invalid product data in catalog",
            json!({ "id": id, "reason": e.to_string() }),
        )
    })
}

/// Builds an `ILIKE` pattern matching `query` as a literal substring.
///
/// Returns `None` for an empty query, which matches every product.
pub(crate) fn like_pattern(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/// PostgreSQL repository for catalog products.
///
/// Queries are bound with placeholders; the search text never becomes part
/// of the SQL string.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn search(&self, query: &str, skip: i64, take: i64) -> Result<Vec<Product>, AppError> {
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN promotions pr ON pr.id = p.promo_id
            WHERE ($1::text IS NULL OR p.title ILIKE $1 OR p.description ILIKE $1)
            ORDER BY p.id
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(like_pattern(query))
            .bind(take)
            .bind(skip)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(to_domain).collect()
    }

    async fn count(&self, query: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products p
            WHERE ($1::text IS NULL OR p.title ILIKE $1 OR p.description ILIKE $1)
            "#,
        )
        .bind(like_pattern(query))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products p
            LEFT JOIN promotions pr ON pr.id = p.promo_id
            WHERE p.id = $1
            "#
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(to_domain).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64, promotion: Option<(i64, &str, i32)>) -> ProductRow {
        ProductRow {
            id: 1,
            title: "Laptop".to_string(),
            description: Some("Gaming laptop".to_string()),
            price,
            image_url: None,
            promotion_id: promotion.map(|p| p.0),
            promotion_code: promotion.map(|p| p.1.to_string()),
            promotion_discount: promotion.map(|p| p.2),
        }
    }

    #[test]
    fn test_like_pattern_empty_query_matches_all() {
        assert_eq!(like_pattern(""), None);
    }

    #[test]
    fn test_like_pattern_wraps_query() {
        assert_eq!(like_pattern("laptop").as_deref(), Some("%laptop%"));
        assert_eq!(like_pattern(" ").as_deref(), Some("% %"));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%").as_deref(), Some("%50\\%%"));
        assert_eq!(like_pattern("usb_c").as_deref(), Some("%usb\\_c%"));
        assert_eq!(like_pattern("a\\b").as_deref(), Some("%a\\\\b%"));
    }

    #[test]
    fn test_row_without_promotion() {
        let product = to_domain(row(1000.0, None)).unwrap();

        assert_eq!(product.title(), "Laptop");
        assert_eq!(product.description(), Some("Gaming laptop"));
        assert!(product.promotion().is_none());
        assert!(!product.is_palindrome_discount());
    }

    #[test]
    fn test_row_with_promotion() {
        let product = to_domain(row(1000.0, Some((1, "SAVE20", 20)))).unwrap();

        let promotion = product.promotion().unwrap();
        assert_eq!(promotion.code(), "SAVE20");
        assert_eq!(promotion.discount(), 20);
        assert_eq!(product.final_price(), 800.0);
    }

    #[test]
    fn test_invalid_row_is_internal_error() {
        assert!(matches!(
            to_domain(row(-1.0, None)),
            Err(AppError::Internal { .. })
        ));
        assert!(matches!(
            to_domain(row(10.0, Some((1, "BROKEN", 120)))),
            Err(AppError::Internal { .. })
        ));
    }
}
