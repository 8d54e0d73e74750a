//! Domain models for Celengan

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category used for transactions that move money into a savings goal
pub const GOAL_SAVINGS_CATEGORY: &str = "Goal Savings";

/// Prefix of the note attached to goal funding transactions
pub const GOAL_FUNDING_NOTE_PREFIX: &str = "Added funds to goal: ";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    /// Always positive; `kind` carries the direction
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount with sign applied (income positive, expense negative)
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A transaction to be inserted, or the replacement values for an update
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub notes: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Transaction amount must be greater than zero (got {})",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::InvalidData(
                "Transaction category cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    /// Deadline; goals without one get no contribution recommendation
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Amount still missing (never negative)
    pub fn amount_needed(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Progress toward the target, capped at 100
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 100.0;
        }
        ((self.current_amount / self.target_amount) * 100.0).min(100.0)
    }
}

/// A goal to be inserted, or the replacement values for an update
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidData("Goal name cannot be empty".to_string()));
        }
        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Goal target amount must be greater than zero (got {})",
                self.target_amount
            )));
        }
        if !self.current_amount.is_finite() || self.current_amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "Goal current amount cannot be negative (got {})",
                self.current_amount
            )));
        }
        Ok(())
    }
}

/// A calendar month that budgets are defined for (text form `YYYY-MM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BudgetPeriod {
    year: i32,
    month: u32,
}

impl BudgetPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(Error::InvalidData(format!(
                "Invalid budget period: {}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The period a date falls in
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidData(format!("Invalid budget period (use YYYY-MM): {}", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for BudgetPeriod {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BudgetPeriod> for String {
    fn from(period: BudgetPeriod) -> Self {
        period.to_string()
    }
}

/// Spending (or income) limit for a category in one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub period: BudgetPeriod,
    pub category: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub created_at: DateTime<Utc>,
}

/// A budget to be upserted for `(period, category)`
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub period: BudgetPeriod,
    pub category: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

impl NewBudget {
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(Error::InvalidData(
                "Budget category cannot be empty".to_string(),
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidData(format!(
                "Budget amount cannot be negative (got {})",
                self.amount
            )));
        }
        Ok(())
    }
}

// ========== Reports ==========

/// Income and expense totals over a period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub income: f64,
    pub expense: f64,
}

impl CashFlow {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Total expense for one category label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: f64,
}

/// Running balance after a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthPoint {
    pub date: NaiveDate,
    /// Short display label, e.g. "Oct 18"
    pub label: String,
    pub balance: f64,
}

/// A budget with the spending recorded against it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
}

/// Spending in a category that has no budget for the period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnbudgetedSpending {
    pub category: String,
    pub spent: f64,
}

/// Budget usage for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub period: BudgetPeriod,
    /// Sorted by percentage used, highest first
    pub items: Vec<BudgetItem>,
    pub unbudgeted: Vec<UnbudgetedSpending>,
}

/// Display label for an expense in category reports
///
/// Goal funding is reported per goal ("Savings: <goal>") instead of under the
/// shared goal savings category.
pub fn expense_category_label(category: &str, notes: Option<&str>) -> String {
    if category == GOAL_SAVINGS_CATEGORY {
        if let Some(notes) = notes.filter(|n| !n.is_empty()) {
            let goal_name = notes.replace(GOAL_FUNDING_NOTE_PREFIX, "");
            return format!("Savings: {}", goal_name);
        }
    }
    category.to_string()
}
