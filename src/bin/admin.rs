//! CLI administration tool for shorturl.
//!
//! Provides commands for inspecting and removing mappings, purging expired
//! entries, and performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Purge expired mappings now instead of waiting for the janitor
//! cargo run --bin admin -- purge
//!
//! # Look up a mapping
//! cargo run --bin admin -- lookup --code promo
//! cargo run --bin admin -- lookup --url https://example.com
//!
//! # Delete a mapping (asks for confirmation unless -y)
//! cargo run --bin admin -- delete --code promo
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
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl::application::services::MappingService;
use shorturl::domain::entities::UrlMapping;
use shorturl::domain::janitor::purge_expired;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::persistence::PgMappingRepository;
use shorturl::utils::url_normalizer::ensure_scheme;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Selects a mapping by short code or original URL.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Target {
    /// Short code or custom alias
    #[arg(short, long)]
    code: Option<String>,

    /// Original URL
    #[arg(short, long)]
    url: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Delete every expired mapping now
    Purge,

    /// Show a single mapping
    Lookup {
        #[command(flatten)]
        target: Target,
    },

    /// Delete a mapping
    Delete {
        #[command(flatten)]
        target: Target,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Purge => purge(repo.as_ref()).await?,
        Commands::Lookup { target } => lookup(repo, target).await?,
        Commands::Delete { target, yes } => delete(repo, target, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Runs one janitor cycle immediately.
async fn purge(repo: &PgMappingRepository) -> Result<()> {
    println!("{}", "🧹 Purging expired mappings".bright_blue().bold());
    println!();

    let removed = purge_expired(repo, Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge: {}", e))?;

    println!(
        "  Removed: {}",
        removed.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn lookup(repo: Arc<PgMappingRepository>, target: Target) -> Result<()> {
    let service = MappingService::new(repo);

    let mapping = service
        .lookup(target.code.as_deref(), target.url.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_mapping(&mapping);

    Ok(())
}

/// Deletes a mapping after showing it and asking for confirmation.
///
/// The URL is given the same `http://` default as on the HTTP API before
/// matching.
async fn delete(repo: Arc<PgMappingRepository>, target: Target, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Mapping".bright_blue().bold());
    println!();

    let existing = match (&target.code, &target.url) {
        (_, Some(url)) => repo.find_by_original_url(&ensure_scheme(url)).await,
        (Some(code), None) => repo.find_by_short_code(code).await,
        (None, None) => anyhow::bail!("Either --code or --url must be provided"),
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Mapping not found")?;

    print_mapping(&existing);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = MappingService::new(repo);
    service
        .delete(target.code.as_deref(), target.url.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete mapping: {}", e))?;

    println!("{}", "✅ Mapping deleted".green().bold());
    println!(
        "{}",
        "  Running servers may keep redirecting from cache until restart.".bright_black()
    );
    println!();

    Ok(())
}

fn print_mapping(mapping: &UrlMapping) {
    let now = Utc::now();

    println!("  Code:     {}", mapping.short_code.cyan());
    println!("  URL:      {}", mapping.original_url.bright_white());
    println!(
        "  Created:  {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );

    match mapping.expiration_date {
        Some(expires) => {
            let status = if mapping.is_expired_at(now) {
                "EXPIRED".red()
            } else {
                "ACTIVE".green()
            };
            println!(
                "  Expires:  {} {}",
                expires.format("%Y-%m-%d %H:%M").to_string().bright_black(),
                status
            );
        }
        None => println!("  Expires:  {}", "never".bright_black()),
    }
    println!();
}

/// Displays mapping counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await?;

    let expired: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings WHERE expiration_date < NOW()")
            .fetch_one(pool)
            .await?;

    println!("  Mappings:        {}", total.to_string().bright_green().bold());
    println!(
        "  Awaiting purge:  {}",
        expired.to_string().bright_yellow().bold()
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
