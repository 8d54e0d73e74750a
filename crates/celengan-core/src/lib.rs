//! Celengan Core Library
//!
//! Shared functionality for the Celengan personal finance tracker:
//! - Database access and migrations (transactions, goals, budgets)
//! - Derived reports (net worth, cash flow, category spending, budget progress)
//! - Savings advisor that recommends a contribution toward a goal
//! - Advisor configuration (currency display, default cadence, markup)

pub mod advisor;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use advisor::{
    round_to_sensible_amount, suggest_contribution, suggest_contribution_now, Cadence,
    ContributionPlan, CurrencyFormat, FinancialSnapshot, Markup, MessageFormatter,
    Recommendation, SuggestionStatus,
};
pub use config::AdvisorConfig;
pub use db::Database;
pub use error::{Error, Result};
