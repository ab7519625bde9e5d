//! Demo catalog data and database seeding.
//!
//! The same data backs the in-memory catalog and `admin seed`, so both
//! sources answer searches identically.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::domain::entities::{Product, Promotion};
use crate::domain::errors::ValidationError;

/// A promotion in the demo catalog.
#[derive(Debug, Clone, Copy)]
pub struct SeedPromotion {
    pub code: &'static str,
    pub discount: i32,
}

/// A product in the demo catalog, referencing its promotion by code.
#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub image_url: &'static str,
    pub promotion_code: Option<&'static str>,
}

/// The complete demo catalog.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub promotions: Vec<SeedPromotion>,
    pub products: Vec<SeedProduct>,
}

/// Rows written by [`seed_demo_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Promotions inserted or updated.
    pub promotions: u64,
    /// Products inserted; zero when the catalog already had products.
    pub products: u64,
}

/// Demo catalog data that cannot be turned into domain products.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("product '{title}' references unknown promotion '{code}'")]
    UnknownPromotion {
        title: &'static str,
        code: &'static str,
    },
}

impl DemoCatalog {
    /// Builds domain products, numbering promotions and products from 1 in
    /// declaration order as a freshly seeded database would.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Invalid`] if a seed entry violates an invariant and
    /// [`SeedError::UnknownPromotion`] if a product names a missing promotion.
    pub fn into_products(self) -> Result<Vec<Product>, SeedError> {
        let promotions = self
            .promotions
            .iter()
            .zip(1_i64..)
            .map(|(seed, id)| {
                Promotion::new(id, seed.code, seed.discount).map(|promotion| (seed.code, promotion))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        self.products
            .iter()
            .zip(1_i64..)
            .map(|(seed, id)| -> Result<Product, SeedError> {
                let promotion = seed
                    .promotion_code
                    .map(|code| {
                        promotions.get(code).cloned().ok_or(SeedError::UnknownPromotion {
                            title: seed.title,
                            code,
                        })
                    })
                    .transpose()?;
                Ok(Product::new(
                    id,
                    seed.title,
                    Some(seed.description.to_string()),
                    seed.price,
                    Some(seed.image_url.to_string()),
                    promotion,
                )?)
            })
            .collect()
    }
}

/// Returns the demo catalog: two seasonal promotions and ten products.
pub fn demo_catalog() -> DemoCatalog {
    DemoCatalog {
        promotions: vec![
            SeedPromotion {
                code: "SUMMER2024",
                discount: 20,
            },
            SeedPromotion {
                code: "WINTER2024",
                discount: 30,
            },
        ],
        products: vec![
            SeedProduct {
                title: "Laptop Pro 15",
                description: "High-performance laptop with 16GB RAM and 512GB SSD",
                price: 1299.99,
                image_url: "https://example.com/laptop-pro.jpg",
                promotion_code: Some("SUMMER2024"),
            },
            SeedProduct {
                title: "Wireless Mouse",
                description: "Ergonomic wireless mouse with Bluetooth connectivity",
                price: 29.99,
                image_url: "https://example.com/mouse.jpg",
                promotion_code: None,
            },
            SeedProduct {
                title: "Mechanical Keyboard",
                description: "RGB mechanical keyboard with Cherry MX switches",
                price: 149.99,
                image_url: "https://example.com/keyboard.jpg",
                promotion_code: Some("WINTER2024"),
            },
            SeedProduct {
                title: "USB-C Hub",
                description: "7-in-1 USB-C hub with HDMI, USB 3.0, and SD card reader",
                price: 49.99,
                image_url: "https://example.com/hub.jpg",
                promotion_code: None,
            },
            SeedProduct {
                title: "Monitor 27\" 4K",
                description: "4K UHD monitor with HDR support and 144Hz refresh rate",
                price: 599.99,
                image_url: "https://example.com/monitor.jpg",
                promotion_code: Some("SUMMER2024"),
            },
            SeedProduct {
                title: "Webcam HD",
                description: "1080p webcam with built-in microphone and auto-focus",
                price: 79.99,
                image_url: "https://example.com/webcam.jpg",
                promotion_code: None,
            },
            SeedProduct {
                title: "Laptop Stand",
                description: "Adjustable aluminum laptop stand for better ergonomics",
                price: 39.99,
                image_url: "https://example.com/stand.jpg",
                promotion_code: None,
            },
            SeedProduct {
                title: "External SSD 1TB",
                description: "Portable SSD with USB 3.2 Gen 2 and read speeds up to 1050MB/s",
                price: 129.99,
                image_url: "https://example.com/ssd.jpg",
                promotion_code: Some("WINTER2024"),
            },
            SeedProduct {
                title: "Headphones Bluetooth",
                description: "Noise-cancelling wireless headphones with 30h battery life",
                price: 199.99,
                image_url: "https://example.com/headphones.jpg",
                promotion_code: None,
            },
            SeedProduct {
                title: "Desk Lamp LED",
                description: "Smart LED desk lamp with adjustable brightness and color temperature",
                price: 59.99,
                image_url: "https://example.com/lamp.jpg",
                promotion_code: None,
            },
        ],
    }
}

/// Inserts the demo catalog in a single transaction.
///
/// With `reset`, existing products and promotions are removed first and
/// identities restart at 1. Without it, promotions are upserted by code and
/// products are only inserted into an empty catalog, so seeding twice leaves
/// a single copy.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`]; the transaction is rolled back.
pub async fn seed_demo_catalog(pool: &PgPool, reset: bool) -> Result<SeedSummary, sqlx::Error> {
    let catalog = demo_catalog();
    let mut tx = pool.begin().await?;

    if reset {
        sqlx::query("TRUNCATE products, promotions RESTART IDENTITY CASCADE")
            .execute(&mut *tx)
            .await?;
        tracing::info!("Catalog tables truncated");
    }

    let mut promotion_ids = HashMap::new();
    for promotion in &catalog.promotions {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO promotions (code, discount)
            VALUES ($1, $2)
            ON CONFLICT (code) DO UPDATE SET discount = EXCLUDED.discount
            RETURNING id
            "#,
        )
        .bind(promotion.code)
        .bind(promotion.discount)
        .fetch_one(&mut *tx)
        .await?;
        promotion_ids.insert(promotion.code, id);
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await?;

    let products_to_insert: &[SeedProduct] = if existing == 0 {
        catalog.products.as_slice()
    } else {
        tracing::info!(existing, "Catalog already has products, skipping product seed");
        &[]
    };

    for product in products_to_insert {
        let promo_id = product
            .promotion_code
            .and_then(|code| promotion_ids.get(code).copied());

        sqlx::query(
            r#"
            INSERT INTO products (title, description, price, image_url, promo_id)
            VALUES ($1, $2, $3::FLOAT8::NUMERIC(10, 2), $4, $5)
            "#,
        )
        .bind(product.title)
        .bind(product.description)
        .bind(product.price)
        .bind(product.image_url)
        .bind(promo_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        promotions: catalog.promotions.len() as u64,
        products: products_to_insert.len() as u64,
    };
    tracing::info!(
        promotions = summary.promotions,
        products = summary.products,
        "Demo catalog seeded"
    );

    Ok(summary)
}
