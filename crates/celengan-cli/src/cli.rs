//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Celengan - Track money and plan savings goals
#[derive(Parser)]
#[command(name = "celengan")]
#[command(about = "Personal finance tracker with a savings goal advisor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "celengan.db", global = true)]
    pub db: PathBuf,

    /// Advisor config file (TOML)
    ///
    /// Defaults to ~/.local/share/celengan/config/advisor.toml when present,
    /// otherwise built-in settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage transactions (list, add, update, delete)
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Manage savings goals (list, add, update, delete, fund, suggest)
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Manage monthly budgets (list, set, delete, copy)
    Budgets {
        #[command(subcommand)]
        action: Option<BudgetsAction>,
    },

    /// Generate reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Recommend a contribution for ad-hoc figures (nothing is stored)
    Suggest {
        /// Goal target amount
        #[arg(long)]
        target: f64,

        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: f64,

        /// Target date (YYYY-MM-DD); omit for a goal without a deadline
        #[arg(long)]
        date: Option<String>,

        /// Average monthly income
        #[arg(long)]
        income: f64,

        /// Average monthly expense
        #[arg(long)]
        expense: f64,

        /// Contribution cadence: daily, weekly, monthly (defaults to config)
        #[arg(short, long)]
        cadence: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List recent transactions
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Record a transaction
    Add {
        /// Amount (always positive)
        amount: f64,

        /// Category (e.g., "Food", "Salary")
        category: String,

        /// Kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-form note
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Replace a transaction's fields
    Update {
        /// Transaction ID
        id: i64,

        /// New amount
        #[arg(long)]
        amount: Option<f64>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New kind: income or expense
        #[arg(short, long)]
        kind: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New note
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals with progress
    List,

    /// Create a savings goal
    Add {
        /// Goal name
        name: String,

        /// Target amount
        target: f64,

        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: f64,

        /// Target date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Change a goal
    Update {
        /// Goal ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New target amount
        #[arg(long)]
        target: Option<f64>,

        /// New saved amount
        #[arg(long)]
        current: Option<f64>,

        /// New target date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_date")]
        date: Option<String>,

        /// Remove the target date
        #[arg(long)]
        clear_date: bool,
    },

    /// Delete a goal (funding transactions are kept)
    Delete {
        /// Goal ID
        id: i64,
    },

    /// Move money into a goal (recorded as a goal savings expense)
    Fund {
        /// Goal ID
        id: i64,

        /// Amount to add
        amount: f64,

        /// Date of the contribution (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Recommend a contribution toward a goal
    Suggest {
        /// Goal ID
        id: i64,

        /// Contribution cadence: daily, weekly, monthly (defaults to config)
        #[arg(short, long)]
        cadence: Option<String>,

        /// Monthly income to assume (defaults to this month's recorded income)
        #[arg(long)]
        income: Option<f64>,

        /// Monthly expense to assume (defaults to this month's recorded expense)
        #[arg(long)]
        expense: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum BudgetsAction {
    /// List budgets for a month
    List {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Create or replace the budget for a category
    Set {
        /// Category
        category: String,

        /// Budgeted amount
        amount: f64,

        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,

        /// Kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: i64,
    },

    /// Copy budgets from one month to another
    Copy {
        /// Source month (YYYY-MM, defaults to the month before --to)
        #[arg(long)]
        from: Option<String>,

        /// Destination month (YYYY-MM, defaults to the current month)
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Total income minus total expenses
    NetWorth {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Income and expense for a month
    CashFlow {
        /// Month (YYYY-MM); defaults to the current month, including later-dated entries
        #[arg(short, long)]
        period: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// All-time spending by category
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Running balance over time
    Trend {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Budget usage for a month
    Budgets {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
