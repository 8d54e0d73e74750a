//! Transaction command implementations

use anyhow::Result;
use celengan_core::models::{NewTransaction, Transaction, TransactionKind};
use celengan_core::{CurrencyFormat, Database};

use super::{parse_date, parse_date_or_today, parse_kind, truncate};

/// Fields to change on `transactions update`; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct TransactionChanges {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub kind: Option<String>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

pub fn cmd_transactions_list(db: &Database, currency: &CurrencyFormat, limit: i64) -> Result<()> {
    let transactions = db.list_transactions(limit, 0)?;

    if transactions.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  celengan transactions add 50000 Food");
        return Ok(());
    }

    let total = db.count_transactions()?;

    println!();
    println!("📝 Recent Transactions ({} of {})", transactions.len(), total);
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let amount_str = match tx.kind {
            TransactionKind::Expense => format!("\x1b[31m-{}\x1b[0m", currency.format(tx.amount)), // Red for expenses
            TransactionKind::Income => format!("\x1b[32m+{}\x1b[0m", currency.format(tx.amount)), // Green for income
        };

        let label = match tx.notes.as_deref() {
            Some(notes) if !notes.is_empty() => format!("{} ({})", tx.category, notes),
            _ => tx.category.clone(),
        };

        println!(
            "   [{}] {} │ {:>16} │ {}",
            tx.id,
            tx.date,
            amount_str,
            truncate(&label, 40)
        );
    }

    Ok(())
}

pub fn cmd_transactions_add(
    db: &Database,
    currency: &CurrencyFormat,
    amount: f64,
    category: &str,
    kind: &str,
    date: Option<&str>,
    notes: Option<String>,
) -> Result<()> {
    let tx = db.insert_transaction(&NewTransaction {
        date: parse_date_or_today(date)?,
        amount,
        kind: parse_kind(kind)?,
        category: category.to_string(),
        notes,
    })?;

    println!("{}", recorded_message(currency, &tx));

    Ok(())
}

pub fn recorded_message(currency: &CurrencyFormat, tx: &Transaction) -> String {
    format!(
        "✅ Recorded {} of {} in {} on {} (id {})",
        tx.kind,
        currency.format(tx.amount),
        tx.category,
        tx.date,
        tx.id
    )
}

pub fn cmd_transactions_update(db: &Database, id: i64, changes: TransactionChanges) -> Result<()> {
    let existing = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    let updated = NewTransaction {
        date: match changes.date.as_deref() {
            Some(date) => parse_date(date)?,
            None => existing.date,
        },
        amount: changes.amount.unwrap_or(existing.amount),
        kind: match changes.kind.as_deref() {
            Some(kind) => parse_kind(kind)?,
            None => existing.kind,
        },
        category: changes.category.unwrap_or(existing.category),
        notes: changes.notes.or(existing.notes),
    };

    let tx = db.update_transaction(id, &updated)?;
    println!(
        "✅ Updated transaction {}: {} │ {} {} │ {}",
        tx.id, tx.date, tx.kind, tx.amount, tx.category
    );

    Ok(())
}

pub fn cmd_transactions_delete(db: &Database, id: i64) -> Result<()> {
    let tx = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    db.delete_transaction(id)?;

    println!("🗑️  Deleted transaction {}:", id);
    println!("   {} │ {} {} │ {}", tx.date, tx.kind, tx.amount, tx.category);

    Ok(())
}
