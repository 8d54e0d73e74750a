//! Net worth, cash flow and budget reports

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rusqlite::params;

use super::{parse_date, parse_kind, Database};
use crate::advisor::FinancialSnapshot;
use crate::error::Result;
use crate::models::*;

/// SQL expression for the signed amount of a transaction row
const SIGNED_AMOUNT_SQL: &str = "CASE WHEN kind = 'income' THEN amount ELSE -amount END";

impl Database {
    /// All income minus all expenses
    pub fn net_worth(&self) -> Result<f64> {
        let conn = self.conn()?;
        let total: f64 = conn.query_row(
            &format!(
                "SELECT COALESCE(SUM({}), 0) FROM transactions",
                SIGNED_AMOUNT_SQL
            ),
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Income and expense totals for transactions dated within `from..=to`
    pub fn cash_flow(&self, from: NaiveDate, to: NaiveDate) -> Result<CashFlow> {
        let conn = self.conn()?;
        let flow = conn.query_row(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN kind = 'income' THEN amount ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN kind = 'expense' THEN amount ELSE 0 END), 0)
            FROM transactions
            WHERE date BETWEEN ?1 AND ?2
            "#,
            params![from.to_string(), to.to_string()],
            |row| {
                Ok(CashFlow {
                    income: row.get(0)?,
                    expense: row.get(1)?,
                })
            },
        )?;
        Ok(flow)
    }

    /// Cash flow for one calendar month
    pub fn month_cash_flow(&self, period: BudgetPeriod) -> Result<CashFlow> {
        self.cash_flow(period.first_day(), period.last_day())
    }

    /// Cash flow from the first day of `today`'s month onward
    ///
    /// Transactions dated later in the month (or beyond) are included, so
    /// scheduled entries already count toward this month's figures.
    pub fn current_month_cash_flow(&self, today: NaiveDate) -> Result<CashFlow> {
        let start = BudgetPeriod::containing(today).first_day();
        let conn = self.conn()?;
        let flow = conn.query_row(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN kind = 'income' THEN amount ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN kind = 'expense' THEN amount ELSE 0 END), 0)
            FROM transactions
            WHERE date >= ?1
            "#,
            params![start.to_string()],
            |row| {
                Ok(CashFlow {
                    income: row.get(0)?,
                    expense: row.get(1)?,
                })
            },
        )?;
        Ok(flow)
    }

    /// All-time expenses grouped by category, largest first
    ///
    /// Goal funding is split out per goal ("Savings: <goal>").
    pub fn expense_by_category(&self) -> Result<Vec<CategoryExpense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT category, notes, SUM(amount)
            FROM transactions
            WHERE kind = 'expense'
            GROUP BY category, notes
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                let category: String = row.get(0)?;
                let notes: Option<String> = row.get(1)?;
                let amount: f64 = row.get(2)?;
                Ok((category, notes, amount))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut totals: HashMap<String, f64> = HashMap::new();
        for (category, notes, amount) in rows {
            let label = expense_category_label(&category, notes.as_deref());
            *totals.entry(label).or_insert(0.0) += amount;
        }

        let mut categories: Vec<CategoryExpense> = totals
            .into_iter()
            .map(|(category, amount)| CategoryExpense { category, amount })
            .collect();
        categories.sort_by(|a, b| {
            b.amount
                .partial_cmp(&a.amount)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(categories)
    }

    /// Running balance after each transaction, in date order
    ///
    /// Empty until at least two transactions exist.
    pub fn net_worth_trend(&self) -> Result<Vec<NetWorthPoint>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT date, kind, amount FROM transactions ORDER BY date, id")?;

        let rows = stmt
            .query_map([], |row| {
                let date_str: String = row.get(0)?;
                let kind_str: String = row.get(1)?;
                let amount: f64 = row.get(2)?;
                Ok((parse_date(&date_str, 0)?, parse_kind(&kind_str, 1)?, amount))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if rows.len() < 2 {
            return Ok(Vec::new());
        }

        let mut balance = 0.0;
        let points = rows
            .into_iter()
            .map(|(date, kind, amount)| {
                balance += match kind {
                    TransactionKind::Income => amount,
                    TransactionKind::Expense => -amount,
                };
                NetWorthPoint {
                    date,
                    label: date.format("%b %d").to_string(),
                    balance,
                }
            })
            .collect();

        Ok(points)
    }

    /// Budget usage for a period plus spending that has no budget
    pub fn budget_progress(&self, period: BudgetPeriod) -> Result<BudgetProgress> {
        let budgets = self.list_budgets(period)?;

        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT category, SUM(amount)
            FROM transactions
            WHERE kind = 'expense' AND date BETWEEN ?1 AND ?2
            GROUP BY category
            ORDER BY category
            "#,
        )?;
        let spending: Vec<(String, f64)> = stmt
            .query_map(
                params![period.first_day().to_string(), period.last_day().to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let spent_by_category: HashMap<&str, f64> = spending
            .iter()
            .map(|(category, spent)| (category.as_str(), *spent))
            .collect();

        let mut items: Vec<BudgetItem> = budgets
            .iter()
            .map(|budget| {
                let spent = spent_by_category
                    .get(budget.category.as_str())
                    .copied()
                    .unwrap_or(0.0);
                BudgetItem {
                    budget: budget.clone(),
                    spent,
                    remaining: budget.amount - spent,
                    percentage: if budget.amount > 0.0 {
                        (spent / budget.amount) * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();
        // Stable sort keeps category order among equal percentages
        items.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let budgeted: HashSet<&str> = budgets.iter().map(|b| b.category.as_str()).collect();
        let mut unbudgeted: Vec<UnbudgetedSpending> = spending
            .iter()
            .filter(|(category, _)| !budgeted.contains(category.as_str()))
            .map(|(category, spent)| UnbudgetedSpending {
                category: category.clone(),
                spent: *spent,
            })
            .collect();
        unbudgeted.sort_by(|a, b| {
            b.spent
                .partial_cmp(&a.spent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(BudgetProgress {
            period,
            items,
            unbudgeted,
        })
    }

    /// Advisor input for a goal, using this month's cash flow as the
    /// monthly income and expense
    pub fn financial_snapshot(&self, goal: &Goal, today: NaiveDate) -> Result<FinancialSnapshot> {
        let flow = self.current_month_cash_flow(today)?;
        Ok(FinancialSnapshot {
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            target_date: goal.target_date,
            monthly_income: flow.income,
            monthly_expense: flow.expense,
        })
    }
}
