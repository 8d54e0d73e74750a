//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` / `load_config` - Shared setup for every command
//! - `cmd_init` - Initialize the database
//! - Parsers for dates, months, kinds and cadences given on the command line

use std::path::Path;

use anyhow::{Context, Result};
use celengan_core::models::{BudgetPeriod, TransactionKind};
use celengan_core::{AdvisorConfig, Cadence, Database};
use chrono::{Local, NaiveDate};

/// Open (or create) the database
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    tracing::debug!(path = %path_str, "Opening database");
    Database::new(path_str).context("Failed to open database")
}

/// Load advisor settings from `--config`, the override file or the defaults
pub fn load_config(config_path: Option<&Path>) -> Result<AdvisorConfig> {
    AdvisorConfig::load(config_path).context("Failed to load advisor config")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let transactions = db.count_transactions()?;
    if transactions > 0 {
        println!("   Existing database with {} transactions", transactions);
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record income:   celengan transactions add 5000000 Salary --kind income");
    println!("  2. Create a goal:   celengan goals add Laptop 15000000 --date 2026-12-31");
    println!("  3. Get a plan:      celengan goals suggest 1");

    Ok(())
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD)", s))
}

/// Parse an optional date argument, defaulting to today
pub fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    s.map(parse_date).unwrap_or_else(|| Ok(today()))
}

/// Parse an optional `YYYY-MM` argument, defaulting to the current month
pub fn parse_period(s: Option<&str>) -> Result<BudgetPeriod> {
    match s {
        Some(s) => Ok(s.parse::<BudgetPeriod>()?),
        None => Ok(BudgetPeriod::containing(today())),
    }
}

pub fn parse_kind(s: &str) -> Result<TransactionKind> {
    s.parse().map_err(|e: String| anyhow::anyhow!(e))
}

/// Parse an optional cadence argument, falling back to the configured default
pub fn parse_cadence(s: Option<&str>, config: &AdvisorConfig) -> Result<Cadence> {
    match s {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(config.default_cadence),
    }
}
