//! Report command implementations

use anyhow::Result;
use celengan_core::models::NetWorthPoint;
use celengan_core::{CurrencyFormat, Database};

use super::{parse_period, today, truncate};

pub fn cmd_report_net_worth(db: &Database, currency: &CurrencyFormat, json: bool) -> Result<()> {
    let net_worth = db.net_worth()?;

    if json {
        let output = serde_json::json!({ "net_worth": net_worth });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("💰 Net worth: {}", currency.format(net_worth));

    Ok(())
}

pub fn cmd_report_cash_flow(
    db: &Database,
    currency: &CurrencyFormat,
    period: Option<&str>,
    json: bool,
) -> Result<()> {
    let (label, flow) = match period {
        Some(_) => {
            let period = parse_period(period)?;
            (period.to_string(), db.month_cash_flow(period)?)
        }
        None => {
            let today = today();
            (
                today.format("%Y-%m").to_string(),
                db.current_month_cash_flow(today)?,
            )
        }
    };

    if json {
        let output = serde_json::json!({
            "period": label,
            "income": flow.income,
            "expense": flow.expense,
            "net": flow.net(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("📊 Cash Flow ({})", label);
    println!("   ─────────────────────────────");
    println!("   Income:  {:>16}", currency.format(flow.income));
    println!("   Expense: {:>16}", currency.format(flow.expense));
    println!("   Net:     {:>16}", currency.format(flow.net()));

    Ok(())
}

pub fn cmd_report_categories(db: &Database, currency: &CurrencyFormat, json: bool) -> Result<()> {
    let categories = db.expense_by_category()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────────");

    if categories.is_empty() {
        println!("   No expenses recorded yet.");
        return Ok(());
    }

    let total: f64 = categories.iter().map(|c| c.amount).sum();
    println!("   Total: {}", currency.format(total));
    println!();
    println!("   {:25} │ {:>16} │ {:>6}", "Category", "Amount", "%");
    println!("   ──────────────────────────┼──────────────────┼────────");

    for category in &categories {
        let percentage = if total > 0.0 {
            category.amount / total * 100.0
        } else {
            0.0
        };
        println!(
            "   {:25} │ {:>16} │ {:>5.1}%",
            truncate(&category.category, 25),
            currency.format(category.amount),
            percentage
        );
    }

    Ok(())
}

pub fn cmd_report_trend(db: &Database, currency: &CurrencyFormat, json: bool) -> Result<()> {
    let points = db.net_worth_trend()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!();
    println!("📈 Net Worth Trend");
    println!("   ─────────────────────────────");

    if points.is_empty() {
        println!("   Not enough transactions yet (need at least 2).");
        return Ok(());
    }

    for point in &points {
        println!("{}", trend_line(currency, point));
    }

    Ok(())
}

/// One row of the trend report, labelled like "Oct 18"
pub fn trend_line(currency: &CurrencyFormat, point: &NetWorthPoint) -> String {
    format!("   {:6} │ {:>16}", point.label, currency.format(point.balance))
}

pub fn cmd_report_budgets(
    db: &Database,
    currency: &CurrencyFormat,
    period: Option<&str>,
    json: bool,
) -> Result<()> {
    let progress = db.budget_progress(parse_period(period)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    println!();
    println!("📋 Budget Progress ({})", progress.period);
    println!("   ─────────────────────────────────────────────────────────────");

    if progress.items.is_empty() {
        println!("   No budgets set for this month.");
    } else {
        println!(
            "   {:20} │ {:>14} │ {:>14} │ {:>14} │ {:>6}",
            "Category", "Budget", "Spent", "Remaining", "Used"
        );
        for item in &progress.items {
            let flag = if item.percentage > 100.0 { " ⚠️" } else { "" };
            println!(
                "   {:20} │ {:>14} │ {:>14} │ {:>14} │ {:>5.0}%{}",
                truncate(&item.budget.category, 20),
                currency.format(item.budget.amount),
                currency.format(item.spent),
                currency.format(item.remaining),
                item.percentage,
                flag
            );
        }
    }

    if !progress.unbudgeted.is_empty() {
        println!();
        println!("   Spending without a budget:");
        for spending in &progress.unbudgeted {
            println!(
                "   {:20} │ {:>14}",
                truncate(&spending.category, 20),
                currency.format(spending.spent)
            );
        }
    }

    Ok(())
}
