//! CLI administration tool for web-url-shortener.
//!
//! Inspects and maintains the link store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show record and click counts
//! cargo run --bin admin -- stats
//!
//! # Show one short link
//! cargo run --bin admin -- info Mario
//!
//! # Delete expired links now
//! cargo run --bin admin -- sweep --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use web_url_shortener::application::services::InfoService;
use web_url_shortener::domain::repositories::WebUrlRepository;
use web_url_shortener::infrastructure::persistence::PgWebUrlRepository;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing web-url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show link and click counts
    Stats,

    /// Show a single short link
    Info {
        /// Suffix of the link (case-sensitive)
        suffix: String,
    },

    /// Delete all expired links
    Sweep {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

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

    let repo = Arc::new(PgWebUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Stats => handle_stats(repo).await?,
        Commands::Info { suffix } => handle_info(repo, &suffix).await?,
        Commands::Sweep { yes } => handle_sweep(repo, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays record and click counts.
async fn handle_stats(repo: Arc<PgWebUrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summary = repo
        .summary(Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("  Links:   {}", summary.total.to_string().bright_green().bold());
    println!("  Live:    {}", summary.live.to_string().green());
    println!("  Expired: {}", summary.expired.to_string().yellow());
    println!(
        "  Clicks:  {}",
        summary.total_clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Prints every field of one record.
async fn handle_info(repo: Arc<PgWebUrlRepository>, suffix: &str) -> Result<()> {
    let service = InfoService::new(repo);

    let web_url = service
        .get_info(suffix)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", suffix, e))?;

    let status = if web_url.is_expired() {
        "EXPIRED".red()
    } else {
        "LIVE".green()
    };

    println!("{}", "🔗 Short link".bright_blue().bold());
    println!();
    println!("  ID:       {}", web_url.id.to_string().bright_black());
    println!("  Suffix:   {}", web_url.suffix.cyan());
    println!("  URL:      {}", web_url.original_url.bright_white());
    println!("  Clicks:   {}", web_url.clicks.to_string().bright_green());
    println!(
        "  Created:  {}",
        web_url.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Expires:  {}",
        web_url.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Status:   {}", status);
    println!();

    Ok(())
}

/// Deletes expired records after confirmation.
async fn handle_sweep(repo: Arc<PgWebUrlRepository>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Sweep expired links".bright_blue().bold());
    println!();

    let summary = repo
        .summary(Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    if summary.expired == 0 {
        println!("{}", "  Nothing to delete".green());
        return Ok(());
    }

    println!(
        "  Expired links: {}",
        summary.expired.to_string().yellow().bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete them now?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo
        .delete_expired(Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete expired links: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Deleted".green().bold(),
        deleted.to_string().bright_white().bold()
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
