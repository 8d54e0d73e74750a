//! Celengan CLI - Personal finance tracker with a savings goal advisor
//!
//! Usage:
//!   celengan init                             Initialize database
//!   celengan transactions add 50000 Food      Record an expense
//!   celengan goals add Laptop 15000000 --date 2026-12-31
//!   celengan goals suggest 1 --cadence weekly Recommend a contribution
//!   celengan report budgets                   Budget usage this month

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let currency = &config.currency;

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_transactions_list(&db, currency, 20),
                Some(TransactionsAction::List { limit }) => {
                    commands::cmd_transactions_list(&db, currency, limit)
                }
                Some(TransactionsAction::Add {
                    amount,
                    category,
                    kind,
                    date,
                    notes,
                }) => commands::cmd_transactions_add(
                    &db,
                    currency,
                    amount,
                    &category,
                    &kind,
                    date.as_deref(),
                    notes,
                ),
                Some(TransactionsAction::Update {
                    id,
                    amount,
                    category,
                    kind,
                    date,
                    notes,
                }) => commands::cmd_transactions_update(
                    &db,
                    id,
                    commands::TransactionChanges {
                        amount,
                        category,
                        kind,
                        date,
                        notes,
                    },
                ),
                Some(TransactionsAction::Delete { id }) => {
                    commands::cmd_transactions_delete(&db, id)
                }
            }
        }
        Commands::Goals { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(GoalsAction::List) => commands::cmd_goals_list(&db, currency),
                Some(GoalsAction::Add {
                    name,
                    target,
                    current,
                    date,
                }) => commands::cmd_goals_add(&db, &name, target, current, date.as_deref()),
                Some(GoalsAction::Update {
                    id,
                    name,
                    target,
                    current,
                    date,
                    clear_date,
                }) => commands::cmd_goals_update(
                    &db,
                    id,
                    commands::GoalChanges {
                        name,
                        target,
                        current,
                        date,
                        clear_date,
                    },
                ),
                Some(GoalsAction::Delete { id }) => commands::cmd_goals_delete(&db, id),
                Some(GoalsAction::Fund { id, amount, date }) => {
                    commands::cmd_goals_fund(&db, currency, id, amount, date.as_deref())
                }
                Some(GoalsAction::Suggest {
                    id,
                    cadence,
                    income,
                    expense,
                    json,
                }) => commands::cmd_goals_suggest(
                    &db,
                    &config,
                    id,
                    cadence.as_deref(),
                    income,
                    expense,
                    json,
                ),
            }
        }
        Commands::Budgets { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_budgets_list(&db, currency, None),
                Some(BudgetsAction::List { period }) => {
                    commands::cmd_budgets_list(&db, currency, period.as_deref())
                }
                Some(BudgetsAction::Set {
                    category,
                    amount,
                    period,
                    kind,
                }) => commands::cmd_budgets_set(
                    &db,
                    currency,
                    &category,
                    amount,
                    period.as_deref(),
                    &kind,
                ),
                Some(BudgetsAction::Delete { id }) => commands::cmd_budgets_delete(&db, id),
                Some(BudgetsAction::Copy { from, to }) => {
                    commands::cmd_budgets_copy(&db, from.as_deref(), to.as_deref())
                }
            }
        }
        Commands::Report { report_type } => {
            let db = commands::open_db(&cli.db)?;
            match report_type {
                ReportType::NetWorth { json } => commands::cmd_report_net_worth(&db, currency, json),
                ReportType::CashFlow { period, json } => {
                    commands::cmd_report_cash_flow(&db, currency, period.as_deref(), json)
                }
                ReportType::Categories { json } => {
                    commands::cmd_report_categories(&db, currency, json)
                }
                ReportType::Trend { json } => commands::cmd_report_trend(&db, currency, json),
                ReportType::Budgets { period, json } => {
                    commands::cmd_report_budgets(&db, currency, period.as_deref(), json)
                }
            }
        }
        Commands::Suggest {
            target,
            current,
            date,
            income,
            expense,
            cadence,
            json,
        } => commands::cmd_suggest(
            &config,
            commands::SuggestArgs {
                target,
                current,
                date,
                income,
                expense,
                cadence,
            },
            json,
        ),
    }
}
