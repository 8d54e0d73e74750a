//! Budget command implementations

use anyhow::Result;
use celengan_core::models::{Budget, NewBudget};
use celengan_core::{CurrencyFormat, Database};

use super::{parse_kind, parse_period};

pub fn cmd_budgets_list(
    db: &Database,
    currency: &CurrencyFormat,
    period: Option<&str>,
) -> Result<()> {
    let period = parse_period(period)?;
    let budgets = db.list_budgets(period)?;

    if budgets.is_empty() {
        println!("No budgets for {}. Set one with:", period);
        println!("  celengan budgets set Food 1500000 --period {}", period);
        return Ok(());
    }

    println!();
    println!("📋 Budgets for {}", period);
    println!("   ─────────────────────────────────────────────");

    for budget in &budgets {
        println!(
            "   [{}] {:20} │ {:>14} │ {}",
            budget.id,
            budget.category,
            currency.format(budget.amount),
            budget.kind
        );
    }

    let total: f64 = budgets.iter().map(|b| b.amount).sum();
    println!("   ─────────────────────────────────────────────");
    println!("   Total: {}", currency.format(total));

    Ok(())
}

pub fn cmd_budgets_set(
    db: &Database,
    currency: &CurrencyFormat,
    category: &str,
    amount: f64,
    period: Option<&str>,
    kind: &str,
) -> Result<()> {
    let budget = db.upsert_budget(&NewBudget {
        period: parse_period(period)?,
        category: category.to_string(),
        amount,
        kind: parse_kind(kind)?,
    })?;

    println!("{}", budget_set_message(currency, &budget));

    Ok(())
}

pub fn budget_set_message(currency: &CurrencyFormat, budget: &Budget) -> String {
    format!(
        "✅ Budget for {} in {} set to {}",
        budget.category,
        budget.period,
        currency.format(budget.amount)
    )
}

pub fn cmd_budgets_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_budget(id)?;
    println!("🗑️  Deleted budget {}", id);
    Ok(())
}

pub fn cmd_budgets_copy(db: &Database, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let to = parse_period(to)?;
    let from = match from {
        Some(from) => parse_period(Some(from))?,
        None => to.previous(),
    };

    if from == to {
        anyhow::bail!("Source and destination month are the same ({})", to);
    }

    let copied = db.copy_budgets(from, to)?;
    if copied == 0 {
        println!("No budgets found for {} to copy.", from);
    } else {
        println!("✅ Copied {} budgets from {} to {}", copied, from, to);
    }

    Ok(())
}
