//! Advisor command implementations

use anyhow::{Context, Result};
use celengan_core::{
    suggest_contribution_now, AdvisorConfig, FinancialSnapshot, MessageFormatter, Recommendation,
};

use super::{parse_cadence, parse_date};

/// Figures for `celengan suggest`
#[derive(Debug)]
pub struct SuggestArgs {
    pub target: f64,
    pub current: f64,
    pub date: Option<String>,
    pub income: f64,
    pub expense: f64,
    pub cadence: Option<String>,
}

pub fn cmd_suggest(config: &AdvisorConfig, args: SuggestArgs, json: bool) -> Result<()> {
    let snapshot = FinancialSnapshot {
        target_amount: args.target,
        current_amount: args.current,
        target_date: args.date.as_deref().map(parse_date).transpose()?,
        monthly_income: args.income,
        monthly_expense: args.expense,
    };
    snapshot.validate().context("Invalid figures")?;

    let cadence = parse_cadence(args.cadence.as_deref(), config)?;
    let recommendation = suggest_contribution_now(&snapshot, cadence);

    print_recommendation(config, None, &recommendation, json)
}

/// Print a recommendation, either for people or as JSON
pub fn print_recommendation(
    config: &AdvisorConfig,
    goal_name: Option<&str>,
    recommendation: &Recommendation,
    json: bool,
) -> Result<()> {
    let formatter = MessageFormatter::from_config(config);
    let message = formatter.message(recommendation);

    if json {
        let output = serde_json::json!({
            "goal": goal_name,
            "status": recommendation.status(),
            "suggestion": recommendation.suggestion(),
            "message": message,
            "recommendation": recommendation,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    match goal_name {
        Some(name) => println!("🎯 Savings plan: {}", name),
        None => println!("🎯 Savings plan"),
    }
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Status: {}", recommendation.status());

    match recommendation {
        Recommendation::Ideal(plan) | Recommendation::Challenging(plan) => {
            println!(
                "   Suggestion: {} per {}",
                formatter.currency.format(plan.amount),
                plan.cadence.unit_label()
            );
        }
        Recommendation::NeedsAdjustment {
            required,
            alternative,
            months_needed,
            projected_completion,
        } => {
            println!(
                "   Required: {} per {}",
                formatter.currency.format(required.amount),
                required.cadence.unit_label()
            );
            println!(
                "   Suggestion: {} per {}",
                formatter.currency.format(alternative.amount),
                alternative.cadence.unit_label()
            );
            println!(
                "   Reached in: {} months (around {})",
                months_needed,
                projected_completion.format("%B %Y")
            );
        }
        Recommendation::Unrealistic {
            monthly_discretionary_income,
        } => {
            println!(
                "   Monthly leftover: {}",
                formatter.currency.format(*monthly_discretionary_income)
            );
        }
        Recommendation::Completed | Recommendation::NoDate | Recommendation::Overdue => {}
    }

    println!();
    for line in message.lines() {
        println!("   {}", line);
    }

    Ok(())
}
