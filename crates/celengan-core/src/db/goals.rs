//! Savings goal operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

use super::{parse_date, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{
    Goal, NewGoal, TransactionKind, GOAL_FUNDING_NOTE_PREFIX, GOAL_SAVINGS_CATEGORY,
};

const GOAL_COLUMNS: &str = "id, name, target_amount, current_amount, target_date, created_at";

fn row_to_goal(row: &Row) -> rusqlite::Result<Goal> {
    let target_date_str: Option<String> = row.get(4)?;
    let created_at_str: String = row.get(5)?;

    Ok(Goal {
        id: row.get(0)?,
        name: row.get(1)?,
        target_amount: row.get(2)?,
        current_amount: row.get(3)?,
        target_date: target_date_str
            .map(|s| parse_date(&s, 4))
            .transpose()?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Create a savings goal
    pub fn insert_goal(&self, goal: &NewGoal) -> Result<Goal> {
        goal.validate()?;
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO goals (name, target_amount, current_amount, target_date) VALUES (?, ?, ?, ?)",
            params![
                goal.name.trim(),
                goal.target_amount,
                goal.current_amount,
                goal.target_date.map(|d| d.to_string()),
            ],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        info!(id, name = %goal.name, "Goal created");
        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))
    }

    /// Get a goal by ID
    pub fn get_goal(&self, id: i64) -> Result<Option<Goal>> {
        let conn = self.conn()?;
        let goal = conn
            .query_row(
                &format!("SELECT {} FROM goals WHERE id = ?", GOAL_COLUMNS),
                params![id],
                row_to_goal,
            )
            .optional()?;
        Ok(goal)
    }

    /// List goals in creation order
    pub fn list_goals(&self) -> Result<Vec<Goal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM goals ORDER BY created_at, id",
            GOAL_COLUMNS
        ))?;

        let goals = stmt
            .query_map([], row_to_goal)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Replace the fields of an existing goal
    pub fn update_goal(&self, id: i64, goal: &NewGoal) -> Result<Goal> {
        goal.validate()?;
        let conn = self.conn()?;

        let updated = conn.execute(
            "UPDATE goals SET name = ?, target_amount = ?, current_amount = ?, target_date = ? WHERE id = ?",
            params![
                goal.name.trim(),
                goal.target_amount,
                goal.current_amount,
                goal.target_date.map(|d| d.to_string()),
                id,
            ],
        )?;
        drop(conn);

        if updated == 0 {
            return Err(Error::NotFound(format!("Goal {}", id)));
        }

        info!(id, "Goal updated");
        self.get_goal(id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))
    }

    /// Delete a goal (its past funding transactions are kept)
    pub fn delete_goal(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM goals WHERE id = ?", params![id])?;

        if deleted == 0 {
            return Err(Error::NotFound(format!("Goal {}", id)));
        }

        info!(id, "Goal deleted");
        Ok(())
    }

    /// Move money into a goal
    ///
    /// Increases the goal's saved amount and records the contribution as a
    /// goal savings expense dated `date`, both in one SQLite transaction.
    pub fn add_funds_to_goal(&self, goal_id: i64, amount: f64, date: NaiveDate) -> Result<Goal> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidData(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let mut conn = self.conn()?;
        let db_tx = conn.transaction()?;

        let (name, current_amount): (String, f64) = db_tx
            .query_row(
                "SELECT name, current_amount FROM goals WHERE id = ?",
                params![goal_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Goal {}", goal_id)))?;

        db_tx.execute(
            "UPDATE goals SET current_amount = ? WHERE id = ?",
            params![current_amount + amount, goal_id],
        )?;

        db_tx.execute(
            "INSERT INTO transactions (date, amount, kind, category, notes) VALUES (?, ?, ?, ?, ?)",
            params![
                date.to_string(),
                amount,
                TransactionKind::Expense.as_str(),
                GOAL_SAVINGS_CATEGORY,
                format!("{}{}", GOAL_FUNDING_NOTE_PREFIX, name),
            ],
        )?;

        db_tx.commit()?;
        drop(conn);

        info!(goal_id, amount, "Funds added to goal");
        self.get_goal(goal_id)?
            .ok_or_else(|| Error::NotFound(format!("Goal {}", goal_id)))
    }
}
