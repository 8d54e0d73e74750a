//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init and shared utilities (open_db, load_config, argument parsing)
//! - `transactions` - Transaction commands (list, add, update, delete)
//! - `goals` - Savings goal commands (list, add, update, delete, fund, suggest)
//! - `budgets` - Budget commands (list, set, delete, copy)
//! - `reports` - Report commands (net worth, cash flow, categories, trend, budgets)
//! - `suggest` - Ad-hoc advisor runs and recommendation output

pub mod budgets;
pub mod core;
pub mod goals;
pub mod reports;
pub mod suggest;
pub mod transactions;

// Re-export command functions for main.rs
pub use budgets::*;
pub use core::*;
pub use goals::*;
pub use reports::*;
pub use suggest::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
