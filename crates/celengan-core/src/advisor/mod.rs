//! Savings advisor
//!
//! Recommends how much to set aside toward a savings goal and explains the
//! recommendation. `engine` holds the decision logic, `format` renders it.

mod engine;
mod format;
mod rounding;

pub use engine::{
    suggest_contribution, suggest_contribution_now, Cadence, ContributionPlan, FinancialSnapshot,
    Recommendation, SuggestionStatus, DAYS_PER_MONTH, MAX_MONTHS_NEEDED, SAFETY_BUFFER,
    WEEKS_PER_MONTH,
};
pub use format::{CurrencyFormat, Markup, MessageFormatter};
pub use rounding::{round_to_sensible_amount, rounding_step};
