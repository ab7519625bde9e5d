//! CLI administration tool for catalog-search.
//!
//! Provides commands for seeding the catalog, running searches, viewing
//! statistics, and performing database checks without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Load the demo catalog (migrations are applied first)
//! cargo run --bin admin -- seed
//!
//! # Replace existing data with the demo catalog
//! cargo run --bin admin -- seed --reset
//!
//! # Search exactly as the API does
//! cargo run --bin admin -- search radar --page-size 5
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use catalog_search::application::use_cases::{SearchProductsInput, SearchProductsUseCase};
use catalog_search::config::{Config, mask_connection_string};
use catalog_search::infrastructure::persistence::PgProductRepository;
use catalog_search::infrastructure::seed::seed_demo_catalog;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing catalog-search.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Load the demo catalog into the database
    Seed {
        /// Delete existing products and promotions first
        #[arg(long)]
        reset: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Search the catalog
    Search {
        /// Search text (empty matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,

        /// Items per page
        #[arg(short = 's', long, default_value_t = 20, allow_negative_numbers = true)]
        page_size: i64,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Seed { reset, yes } => handle_seed(&pool, reset, yes).await?,
        Commands::Search {
            query,
            page,
            page_size,
        } => handle_search(&pool, query, page, page_size).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Applies migrations and loads the demo catalog.
///
/// `--reset` wipes both catalog tables, so it asks for confirmation
/// (default: No) unless `--yes` is given.
async fn handle_seed(pool: &PgPool, reset: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Demo Catalog".bright_blue().bold());
    println!();

    if reset && !skip_confirm {
        println!(
            "{}",
            "⚠️  All existing products and promotions will be deleted".yellow()
        );
        let confirmed = Confirm::new()
            .with_prompt("Reset the catalog?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    let summary = seed_demo_catalog(pool, reset)
        .await
        .context("Failed to seed demo catalog")?;

    println!(
        "  Promotions: {}",
        summary.promotions.to_string().bright_green().bold()
    );
    println!(
        "  Products:   {}",
        summary.products.to_string().bright_green().bold()
    );
    println!();

    if summary.products == 0 {
        println!(
            "{}",
            "⚠️  Products already present, left unchanged (use --reset to reload)".yellow()
        );
        println!();
    }
    println!("{}", "✅ Catalog seeded successfully!".green().bold());
    println!();

    Ok(())
}

/// Runs a search through the same use case as the HTTP API and prints the page.
async fn handle_search(pool: &PgPool, query: String, page: i64, page_size: i64) -> Result<()> {
    let repository = Arc::new(PgProductRepository::new(Arc::new(pool.clone())));
    let use_case = SearchProductsUseCase::new(repository);

    let output = use_case
        .execute(SearchProductsInput {
            query: query.clone(),
            page,
            page_size,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Search failed: {}", e))?;

    println!(
        "{} {}",
        "🔎 Search:".bright_blue().bold(),
        format!("{query:?}").cyan()
    );
    println!();

    if output.products.is_empty() {
        println!("{}", "  No products found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<4} {:<28} {:>10} {:>10}  {}",
        "ID".bold(),
        "TITLE".bold(),
        "PRICE".bold(),
        "FINAL".bold(),
        "PROMOTION".bold()
    );

    for product in &output.products {
        let promotion = match &product.promotion {
            Some(promotion) if product.is_palindrome_discount => {
                format!("{} -{}%", promotion.code, promotion.discount)
                    .magenta()
                    .bold()
            }
            Some(promotion) => format!("{} -{}%", promotion.code, promotion.discount).green(),
            None => "-".bright_black(),
        };

        println!(
            "  {:<4} {:<28} {:>10.2} {:>10}  {}",
            product.id.to_string().bright_black(),
            product.title.cyan(),
            product.price,
            format!("{:.2}", product.final_price).bright_white(),
            promotion
        );
    }

    println!();
    println!(
        "  Page {} of {} ({} matching, {} per page)",
        output.current_page.to_string().bright_white(),
        output.total_pages.to_string().bright_white(),
        output.total_count.to_string().bright_white().bold(),
        output.page_size
    );
    println!();

    Ok(())
}

/// Displays catalog statistics.
///
/// Shows:
/// - Total number of products
/// - Total number of promotions
/// - Number of products with a promotion
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let products_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let promotions_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM promotions")
        .fetch_one(pool)
        .await?;

    let promoted_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE promo_id IS NOT NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Products:          {}",
        products_count.to_string().bright_green().bold()
    );
    println!(
        "  Promotions:        {}",
        promotions_count.to_string().bright_green().bold()
    );
    println!(
        "  Promoted products: {}",
        promoted_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
