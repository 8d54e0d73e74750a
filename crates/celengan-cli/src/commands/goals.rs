//! Savings goal command implementations

use anyhow::{Context, Result};
use celengan_core::models::{Goal, NewGoal};
use celengan_core::{suggest_contribution_now, AdvisorConfig, CurrencyFormat, Database};

use super::{parse_cadence, parse_date, parse_date_or_today, print_recommendation, today, truncate};

/// Fields to change on `goals update`; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct GoalChanges {
    pub name: Option<String>,
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub date: Option<String>,
    pub clear_date: bool,
}

pub fn cmd_goals_list(db: &Database, currency: &CurrencyFormat) -> Result<()> {
    let goals = db.list_goals()?;

    if goals.is_empty() {
        println!("No goals yet. Create one with:");
        println!("  celengan goals add Laptop 15000000 --date 2026-12-31");
        return Ok(());
    }

    println!();
    println!("🎯 Savings Goals");
    println!("   ─────────────────────────────────────────────────────────────");

    for goal in goals {
        let deadline = goal
            .target_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "no date".to_string());
        let marker = if goal.is_completed() { "✅" } else { "  " };

        println!(
            "{} [{}] {:20} │ {:>14} / {:>14} │ {:>5.1}% │ {}",
            marker,
            goal.id,
            truncate(&goal.name, 20),
            currency.format(goal.current_amount),
            currency.format(goal.target_amount),
            goal.progress_percentage(),
            deadline
        );
    }

    Ok(())
}

pub fn cmd_goals_add(
    db: &Database,
    name: &str,
    target: f64,
    current: f64,
    date: Option<&str>,
) -> Result<()> {
    let goal = db.insert_goal(&NewGoal {
        name: name.to_string(),
        target_amount: target,
        current_amount: current,
        target_date: date.map(parse_date).transpose()?,
    })?;

    println!("✅ Created goal '{}' (id {})", goal.name, goal.id);
    if goal.target_date.is_none() {
        println!("   Tip: add --date to get contribution suggestions");
    }

    Ok(())
}

pub fn cmd_goals_update(db: &Database, id: i64, changes: GoalChanges) -> Result<()> {
    let existing = db
        .get_goal(id)?
        .ok_or_else(|| anyhow::anyhow!("Goal {} not found", id))?;

    let target_date = if changes.clear_date {
        None
    } else {
        match changes.date.as_deref() {
            Some(date) => Some(parse_date(date)?),
            None => existing.target_date,
        }
    };

    let goal = db.update_goal(
        id,
        &NewGoal {
            name: changes.name.unwrap_or(existing.name),
            target_amount: changes.target.unwrap_or(existing.target_amount),
            current_amount: changes.current.unwrap_or(existing.current_amount),
            target_date,
        },
    )?;

    println!("✅ Updated goal '{}' ({:.1}% saved)", goal.name, goal.progress_percentage());

    Ok(())
}

pub fn cmd_goals_delete(db: &Database, id: i64) -> Result<()> {
    let goal = db
        .get_goal(id)?
        .ok_or_else(|| anyhow::anyhow!("Goal {} not found", id))?;

    db.delete_goal(id)?;
    println!("🗑️  Deleted goal '{}'", goal.name);

    Ok(())
}

pub fn cmd_goals_fund(
    db: &Database,
    currency: &CurrencyFormat,
    id: i64,
    amount: f64,
    date: Option<&str>,
) -> Result<()> {
    let goal = db
        .add_funds_to_goal(id, amount, parse_date_or_today(date)?)
        .with_context(|| format!("Failed to add funds to goal {}", id))?;

    println!("{}", funded_message(currency, amount, &goal));
    if goal.is_completed() {
        println!("   🎉 Goal reached!");
    }

    Ok(())
}

pub fn funded_message(currency: &CurrencyFormat, amount: f64, goal: &Goal) -> String {
    format!(
        "✅ Added {} to '{}' ({:.1}% saved)",
        currency.format(amount),
        goal.name,
        goal.progress_percentage()
    )
}

pub fn cmd_goals_suggest(
    db: &Database,
    config: &AdvisorConfig,
    id: i64,
    cadence: Option<&str>,
    income: Option<f64>,
    expense: Option<f64>,
    json: bool,
) -> Result<()> {
    let goal = db
        .get_goal(id)?
        .ok_or_else(|| anyhow::anyhow!("Goal {} not found", id))?;

    let mut snapshot = db.financial_snapshot(&goal, today())?;
    if let Some(income) = income {
        snapshot.monthly_income = income;
    }
    if let Some(expense) = expense {
        snapshot.monthly_expense = expense;
    }
    snapshot.validate().context("Invalid figures")?;

    let cadence = parse_cadence(cadence, config)?;
    let recommendation = suggest_contribution_now(&snapshot, cadence);

    print_recommendation(config, Some(&goal.name), &recommendation, json)
}
