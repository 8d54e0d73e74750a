//! Budget operations

use rusqlite::{params, Row};
use tracing::info;

use super::{parse_datetime, parse_kind, Database};
use crate::error::{Error, Result};
use crate::models::{Budget, BudgetPeriod, NewBudget};

const BUDGET_COLUMNS: &str = "id, period, category, amount, kind, created_at";

fn row_to_budget(row: &Row) -> rusqlite::Result<Budget> {
    let period_str: String = row.get(1)?;
    let kind_str: String = row.get(4)?;
    let created_at_str: String = row.get(5)?;

    Ok(Budget {
        id: row.get(0)?,
        period: period_str.parse().map_err(|e: Error| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                e.to_string().into(),
            )
        })?,
        category: row.get(2)?,
        amount: row.get(3)?,
        kind: parse_kind(&kind_str, 4)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// List budgets for a period, ordered by category
    pub fn list_budgets(&self, period: BudgetPeriod) -> Result<Vec<Budget>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM budgets WHERE period = ? ORDER BY category",
            BUDGET_COLUMNS
        ))?;

        let budgets = stmt
            .query_map(params![period.to_string()], row_to_budget)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(budgets)
    }

    /// Create the budget for `(period, category)` or replace its amount
    pub fn upsert_budget(&self, budget: &NewBudget) -> Result<Budget> {
        budget.validate()?;
        let conn = self.conn()?;

        let saved = conn.query_row(
            &format!(
                r#"
                INSERT INTO budgets (period, category, amount, kind)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(period, category) DO UPDATE SET
                    amount = excluded.amount,
                    kind = excluded.kind
                RETURNING {}
                "#,
                BUDGET_COLUMNS
            ),
            params![
                budget.period.to_string(),
                budget.category.trim(),
                budget.amount,
                budget.kind.as_str(),
            ],
            row_to_budget,
        )?;

        info!(
            period = %saved.period,
            category = %saved.category,
            amount = saved.amount,
            "Budget saved"
        );
        Ok(saved)
    }

    /// Delete a budget
    pub fn delete_budget(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM budgets WHERE id = ?", params![id])?;

        if deleted == 0 {
            return Err(Error::NotFound(format!("Budget {}", id)));
        }

        info!(id, "Budget deleted");
        Ok(())
    }

    /// Copy every budget of `from` into `to`
    ///
    /// Existing budgets in `to` for the same categories take the copied amount.
    /// Returns the number of budgets copied (0 when `from` has none).
    pub fn copy_budgets(&self, from: BudgetPeriod, to: BudgetPeriod) -> Result<usize> {
        let source = self.list_budgets(from)?;
        if source.is_empty() {
            info!(from = %from, "No budgets to copy");
            return Ok(0);
        }

        let mut conn = self.conn()?;
        let db_tx = conn.transaction()?;
        for budget in &source {
            db_tx.execute(
                r#"
                INSERT INTO budgets (period, category, amount, kind)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(period, category) DO UPDATE SET
                    amount = excluded.amount,
                    kind = excluded.kind
                "#,
                params![
                    to.to_string(),
                    budget.category,
                    budget.amount,
                    budget.kind.as_str(),
                ],
            )?;
        }
        db_tx.commit()?;

        info!(from = %from, to = %to, count = source.len(), "Budgets copied");
        Ok(source.len())
    }
}
