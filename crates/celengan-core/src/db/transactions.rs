//! Transaction operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

use super::{parse_date, parse_datetime, parse_kind, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

pub(crate) const TRANSACTION_COLUMNS: &str =
    "id, date, amount, kind, category, notes, created_at";

/// Map a row selected with `TRANSACTION_COLUMNS`
pub(crate) fn row_to_transaction(row: &Row) -> rusqlite::Result<Transaction> {
    let date_str: String = row.get(1)?;
    let kind_str: String = row.get(3)?;
    let created_at_str: String = row.get(6)?;

    Ok(Transaction {
        id: row.get(0)?,
        date: parse_date(&date_str, 1)?,
        amount: row.get(2)?,
        kind: parse_kind(&kind_str, 3)?,
        category: row.get(4)?,
        notes: row.get(5)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Record a new transaction
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction> {
        tx.validate()?;
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO transactions (date, amount, kind, category, notes) VALUES (?, ?, ?, ?, ?)",
            params![
                tx.date.to_string(),
                tx.amount,
                tx.kind.as_str(),
                tx.category.trim(),
                tx.notes,
            ],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        info!(id, kind = tx.kind.as_str(), amount = tx.amount, "Transaction recorded");
        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", id)))
    }

    /// Get a transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let tx = conn
            .query_row(
                &format!("SELECT {} FROM transactions WHERE id = ?", TRANSACTION_COLUMNS),
                params![id],
                row_to_transaction,
            )
            .optional()?;
        Ok(tx)
    }

    /// List transactions, newest first
    pub fn list_transactions(&self, limit: i64, offset: i64) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions ORDER BY date DESC, id DESC LIMIT ? OFFSET ?",
            TRANSACTION_COLUMNS
        ))?;

        let transactions = stmt
            .query_map(params![limit, offset], row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// List transactions dated within `from..=to`, oldest first
    pub fn list_transactions_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions WHERE date BETWEEN ?1 AND ?2 ORDER BY date, id",
            TRANSACTION_COLUMNS
        ))?;

        let transactions = stmt
            .query_map(
                params![from.to_string(), to.to_string()],
                row_to_transaction,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Count all transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Replace the fields of an existing transaction
    pub fn update_transaction(&self, id: i64, tx: &NewTransaction) -> Result<Transaction> {
        tx.validate()?;
        let conn = self.conn()?;

        let updated = conn.execute(
            "UPDATE transactions SET date = ?, amount = ?, kind = ?, category = ?, notes = ? WHERE id = ?",
            params![
                tx.date.to_string(),
                tx.amount,
                tx.kind.as_str(),
                tx.category.trim(),
                tx.notes,
                id,
            ],
        )?;
        drop(conn);

        if updated == 0 {
            return Err(Error::NotFound(format!("Transaction {}", id)));
        }

        info!(id, "Transaction updated");
        self.get_transaction(id)?
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", id)))
    }

    /// Delete a transaction
    pub fn delete_transaction(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;

        if deleted == 0 {
            return Err(Error::NotFound(format!("Transaction {}", id)));
        }

        info!(id, "Transaction deleted");
        Ok(())
    }
}
