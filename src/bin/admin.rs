//! CLI administration tool for hospital-registry.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # List hospitals
//! cargo run --bin admin -- hospitals list
//!
//! # Delete a hospital
//! cargo run --bin admin -- hospitals delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, defaults to
//!   `sqlite://hospitals.db?mode=rwc`

use hospital_registry::application::services::HospitalService;
use hospital_registry::config::DEFAULT_DATABASE_URL;
use hospital_registry::error::AppError;
use hospital_registry::infrastructure::persistence::{
    self, PoolSettings, SqliteHospitalRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing hospital-registry.
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
    /// Manage registered hospitals
    Hospitals {
        #[command(subcommand)]
        action: HospitalAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Hospital management subcommands.
#[derive(Subcommand)]
enum HospitalAction {
    /// List all hospitals
    List,

    /// Delete a hospital by ID
    Delete {
        /// Hospital ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = persistence::connect(&database_url, &PoolSettings::default())
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Hospitals { action } => handle_hospital_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches hospital commands.
async fn handle_hospital_action(action: HospitalAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteHospitalRepository::new(Arc::new(pool.clone())));
    let service = HospitalService::new(repo);

    match action {
        HospitalAction::List => list_hospitals(&service).await?,
        HospitalAction::Delete { id, yes } => delete_hospital(&service, id, yes).await?,
    }

    Ok(())
}

/// Prints all hospitals as a table.
///
/// ```text
/// Hospitals
///
///   ID  Name                           Phone            Capacity  Created
///   ──────────────────────────────────────────────────────────────────────────
///   1   Test Hospital                  1234567890       100       2026-01-15 10:30
/// ```
async fn list_hospitals(service: &HospitalService<SqliteHospitalRepository>) -> Result<()> {
    println!("{}", "Hospitals".bright_blue().bold());
    println!();

    let hospitals = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list hospitals: {}", e))?;

    if hospitals.is_empty() {
        println!("{}", "  No hospitals registered".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<16} {:<9} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Phone".bright_white().bold(),
        "Capacity".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for h in &hospitals {
        println!(
            "  {:<3} {:<30} {:<16} {:<9} {}",
            h.id.to_string().bright_black(),
            h.name.cyan(),
            h.phone,
            h.capacity,
            h.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        hospitals.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a hospital after confirmation (default: No).
async fn delete_hospital(
    service: &HospitalService<SqliteHospitalRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    let hospital = match service.get(id).await {
        Ok(h) => h,
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("Hospital {} not found", id).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Hospital: {}", hospital.name.cyan());
    println!("  Address:  {}", hospital.address);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this hospital?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete hospital: {}", e))?;

    println!("{}", "Hospital deleted".green().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            let repo = Arc::new(SqliteHospitalRepository::new(Arc::new(pool.clone())));
            let count = HospitalService::new(repo).count().await.map_err(|e| {
                anyhow::anyhow!("{}. Run `admin db migrate` if the schema is missing", e)
            })?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Hospitals: {}", count.to_string().bright_white().bold());
        }
        DbAction::Migrate => {
            persistence::migrate(pool)
                .await
                .context("Failed to apply migrations")?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
