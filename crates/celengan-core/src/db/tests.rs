//! Database tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(db: &Database, on: NaiveDate, amount: f64, kind: TransactionKind, category: &str) {
        db.insert_transaction(&NewTransaction {
            date: on,
            amount,
            kind,
            category: category.to_string(),
            notes: None,
        })
        .unwrap();
    }

    fn period(s: &str) -> BudgetPeriod {
        s.parse().unwrap()
    }

    #[test]
    fn test_in_memory_db() {
        let db = Database::in_memory().unwrap();
        assert_eq!(db.count_transactions().unwrap(), 0);
        assert!(db.list_goals().unwrap().is_empty());
        assert_eq!(db.net_worth().unwrap(), 0.0);
    }

    #[test]
    fn test_schema_exists() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('transactions', 'goals', 'budgets')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let db = Database::in_memory().unwrap();
        record(&db, date(2024, 1, 5), 100.0, TransactionKind::Income, "Salary");

        let reopened = Database::new(db.path()).unwrap();
        assert_eq!(reopened.count_transactions().unwrap(), 1);
    }

    #[test]
    fn test_transaction_crud() {
        let db = Database::in_memory().unwrap();

        let tx = db
            .insert_transaction(&NewTransaction {
                date: date(2024, 3, 10),
                amount: 75_000.0,
                kind: TransactionKind::Expense,
                category: " Food ".to_string(),
                notes: Some("Lunch".to_string()),
            })
            .unwrap();
        assert!(tx.id > 0);
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.notes.as_deref(), Some("Lunch"));

        let fetched = db.get_transaction(tx.id).unwrap().unwrap();
        assert_eq!(fetched.amount, 75_000.0);
        assert_eq!(fetched.kind, TransactionKind::Expense);

        let updated = db
            .update_transaction(
                tx.id,
                &NewTransaction {
                    date: date(2024, 3, 11),
                    amount: 80_000.0,
                    kind: TransactionKind::Expense,
                    category: "Dining".to_string(),
                    notes: None,
                },
            )
            .unwrap();
        assert_eq!(updated.amount, 80_000.0);
        assert_eq!(updated.category, "Dining");
        assert_eq!(updated.date, date(2024, 3, 11));

        db.delete_transaction(tx.id).unwrap();
        assert!(db.get_transaction(tx.id).unwrap().is_none());
        assert!(matches!(
            db.delete_transaction(tx.id),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_transaction_rejected() {
        let db = Database::in_memory().unwrap();
        let result = db.insert_transaction(&NewTransaction {
            date: date(2024, 1, 1),
            amount: -5.0,
            kind: TransactionKind::Income,
            category: "Salary".to_string(),
            notes: None,
        });
        assert!(matches!(result, Err(Error::InvalidData(_))));
        assert_eq!(db.count_transactions().unwrap(), 0);
    }

    #[test]
    fn test_update_missing_transaction() {
        let db = Database::in_memory().unwrap();
        let result = db.update_transaction(
            42,
            &NewTransaction {
                date: date(2024, 1, 1),
                amount: 5.0,
                kind: TransactionKind::Income,
                category: "Salary".to_string(),
                notes: None,
            },
        );
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_list_transactions_ordering() {
        let db = Database::in_memory().unwrap();
        record(&db, date(2024, 1, 1), 1.0, TransactionKind::Income, "A");
        record(&db, date(2024, 1, 3), 2.0, TransactionKind::Income, "B");
        record(&db, date(2024, 1, 2), 3.0, TransactionKind::Income, "C");

        let newest_first = db.list_transactions(10, 0).unwrap();
        let categories: Vec<&str> = newest_first.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["B", "C", "A"]);

        let page = db.list_transactions(1, 1).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].category, "C");

        let range = db
            .list_transactions_between(date(2024, 1, 2), date(2024, 1, 3))
            .unwrap();
        let categories: Vec<&str> = range.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, vec!["C", "B"]);
    }

    #[test]
    fn test_goal_crud() {
        let db = Database::in_memory().unwrap();

        let goal = db
            .insert_goal(&NewGoal {
                name: "Laptop".to_string(),
                target_amount: 15_000_000.0,
                current_amount: 0.0,
                target_date: Some(date(2025, 6, 1)),
            })
            .unwrap();
        assert_eq!(goal.name, "Laptop");
        assert_eq!(goal.target_date, Some(date(2025, 6, 1)));

        let updated = db
            .update_goal(
                goal.id,
                &NewGoal {
                    name: "Gaming Laptop".to_string(),
                    target_amount: 20_000_000.0,
                    current_amount: 1_000_000.0,
                    target_date: None,
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Gaming Laptop");
        assert_eq!(updated.current_amount, 1_000_000.0);
        assert!(updated.target_date.is_none());

        assert_eq!(db.list_goals().unwrap().len(), 1);
        db.delete_goal(goal.id).unwrap();
        assert!(db.get_goal(goal.id).unwrap().is_none());
        assert!(matches!(db.delete_goal(goal.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_add_funds_to_goal() {
        let db = Database::in_memory().unwrap();
        let goal = db
            .insert_goal(&NewGoal {
                name: "Trip".to_string(),
                target_amount: 1_000_000.0,
                current_amount: 100_000.0,
                target_date: None,
            })
            .unwrap();

        let funded = db
            .add_funds_to_goal(goal.id, 250_000.0, date(2024, 5, 2))
            .unwrap();
        assert_eq!(funded.current_amount, 350_000.0);

        let txs = db.list_transactions(10, 0).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].kind, TransactionKind::Expense);
        assert_eq!(txs[0].amount, 250_000.0);
        assert_eq!(txs[0].category, GOAL_SAVINGS_CATEGORY);
        assert_eq!(txs[0].notes.as_deref(), Some("Added funds to goal: Trip"));
        assert_eq!(db.net_worth().unwrap(), -250_000.0);
    }

    #[test]
    fn test_add_funds_rejects_bad_input() {
        let db = Database::in_memory().unwrap();
        let goal = db
            .insert_goal(&NewGoal {
                name: "Trip".to_string(),
                target_amount: 1_000_000.0,
                current_amount: 0.0,
                target_date: None,
            })
            .unwrap();

        assert!(matches!(
            db.add_funds_to_goal(goal.id, 0.0, date(2024, 5, 2)),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            db.add_funds_to_goal(goal.id + 1, 10.0, date(2024, 5, 2)),
            Err(Error::NotFound(_))
        ));
        // Nothing was written by the failed attempts
        assert_eq!(db.count_transactions().unwrap(), 0);
        assert_eq!(db.get_goal(goal.id).unwrap().unwrap().current_amount, 0.0);
    }

    #[test]
    fn test_budget_upsert_replaces_amount() {
        let db = Database::in_memory().unwrap();
        let march = period("2024-03");

        let first = db
            .upsert_budget(&NewBudget {
                period: march,
                category: "Food".to_string(),
                amount: 1_000_000.0,
                kind: TransactionKind::Expense,
            })
            .unwrap();
        let second = db
            .upsert_budget(&NewBudget {
                period: march,
                category: "Food".to_string(),
                amount: 1_500_000.0,
                kind: TransactionKind::Expense,
            })
            .unwrap();

        assert_eq!(first.id, second.id);
        let budgets = db.list_budgets(march).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, 1_500_000.0);
        assert_eq!(budgets[0].period, march);

        db.delete_budget(first.id).unwrap();
        assert!(db.list_budgets(march).unwrap().is_empty());
        assert!(matches!(db.delete_budget(first.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_copy_budgets() {
        let db = Database::in_memory().unwrap();
        let feb = period("2024-02");
        let march = period("2024-03");

        assert_eq!(db.copy_budgets(feb, march).unwrap(), 0);

        for (category, amount) in [("Food", 1_000_000.0), ("Transport", 400_000.0)] {
            db.upsert_budget(&NewBudget {
                period: feb,
                category: category.to_string(),
                amount,
                kind: TransactionKind::Expense,
            })
            .unwrap();
        }
        db.upsert_budget(&NewBudget {
            period: march,
            category: "Food".to_string(),
            amount: 50.0,
            kind: TransactionKind::Expense,
        })
        .unwrap();

        assert_eq!(db.copy_budgets(feb, march).unwrap(), 2);

        let copied = db.list_budgets(march).unwrap();
        assert_eq!(copied.len(), 2);
        assert_eq!(copied[0].category, "Food");
        assert_eq!(copied[0].amount, 1_000_000.0);
        assert_eq!(copied[1].category, "Transport");
        // Source month untouched
        assert_eq!(db.list_budgets(feb).unwrap().len(), 2);
    }

    #[test]
    fn test_net_worth_and_cash_flow() {
        let db = Database::in_memory().unwrap();
        record(&db, date(2024, 2, 28), 2_000_000.0, TransactionKind::Income, "Salary");
        record(&db, date(2024, 3, 1), 5_000_000.0, TransactionKind::Income, "Salary");
        record(&db, date(2024, 3, 15), 1_200_000.0, TransactionKind::Expense, "Rent");
        record(&db, date(2024, 3, 31), 300_000.0, TransactionKind::Expense, "Food");

        assert_eq!(db.net_worth().unwrap(), 5_500_000.0);

        let march = db.month_cash_flow(period("2024-03")).unwrap();
        assert_eq!(march.income, 5_000_000.0);
        assert_eq!(march.expense, 1_500_000.0);
        assert_eq!(march.net(), 3_500_000.0);

        let empty = db.month_cash_flow(period("2023-01")).unwrap();
        assert_eq!(empty, CashFlow::default());
    }

    #[test]
    fn test_current_month_includes_later_dates() {
        let db = Database::in_memory().unwrap();
        record(&db, date(2024, 2, 29), 1_000.0, TransactionKind::Expense, "Food");
        record(&db, date(2024, 3, 1), 5_000.0, TransactionKind::Income, "Salary");
        record(&db, date(2024, 4, 2), 2_000.0, TransactionKind::Expense, "Rent");

        let flow = db.current_month_cash_flow(date(2024, 3, 10)).unwrap();
        assert_eq!(flow.income, 5_000.0);
        assert_eq!(flow.expense, 2_000.0);
    }

    #[test]
    fn test_expense_by_category_splits_goal_savings() {
        let db = Database::in_memory().unwrap();
        record(&db, date(2024, 3, 1), 300_000.0, TransactionKind::Expense, "Food");
        record(&db, date(2024, 3, 2), 200_000.0, TransactionKind::Expense, "Food");
        record(&db, date(2024, 3, 3), 900_000.0, TransactionKind::Income, "Salary");
        record(&db, date(2024, 3, 4), 100_000.0, TransactionKind::Expense, "Transport");

        let goal = db
            .insert_goal(&NewGoal {
                name: "Laptop".to_string(),
                target_amount: 10_000_000.0,
                current_amount: 0.0,
                target_date: None,
            })
            .unwrap();
        db.add_funds_to_goal(goal.id, 400_000.0, date(2024, 3, 5)).unwrap();
        db.add_funds_to_goal(goal.id, 300_000.0, date(2024, 3, 6)).unwrap();

        let categories = db.expense_by_category().unwrap();
        let pairs: Vec<(&str, f64)> = categories
            .iter()
            .map(|c| (c.category.as_str(), c.amount))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Savings: Laptop", 700_000.0),
                ("Food", 500_000.0),
                ("Transport", 100_000.0),
            ]
        );
    }

    #[test]
    fn test_net_worth_trend() {
        let db = Database::in_memory().unwrap();
        assert!(db.net_worth_trend().unwrap().is_empty());

        record(&db, date(2024, 3, 2), 1_000.0, TransactionKind::Income, "Salary");
        assert!(db.net_worth_trend().unwrap().is_empty());

        record(&db, date(2024, 3, 1), 400.0, TransactionKind::Expense, "Food");
        record(&db, date(2024, 3, 5), 50.0, TransactionKind::Income, "Gift");

        let trend = db.net_worth_trend().unwrap();
        let balances: Vec<f64> = trend.iter().map(|p| p.balance).collect();
        assert_eq!(balances, vec![-400.0, 600.0, 650.0]);
        assert_eq!(trend[0].label, "Mar 01");
        assert_eq!(trend[2].date, date(2024, 3, 5));
    }

    #[test]
    fn test_budget_progress() {
        let db = Database::in_memory().unwrap();
        let march = period("2024-03");

        for (category, amount) in [("Food", 1_000_000.0), ("Rent", 2_000_000.0), ("Fun", 0.0)] {
            db.upsert_budget(&NewBudget {
                period: march,
                category: category.to_string(),
                amount,
                kind: TransactionKind::Expense,
            })
            .unwrap();
        }

        record(&db, date(2024, 3, 3), 800_000.0, TransactionKind::Expense, "Food");
        record(&db, date(2024, 3, 4), 500_000.0, TransactionKind::Expense, "Rent");
        record(&db, date(2024, 3, 9), 150_000.0, TransactionKind::Expense, "Coffee");
        record(&db, date(2024, 3, 9), 250_000.0, TransactionKind::Expense, "Gadgets");
        // Outside the period
        record(&db, date(2024, 4, 1), 999_000.0, TransactionKind::Expense, "Food");

        let progress = db.budget_progress(march).unwrap();
        assert_eq!(progress.period, march);

        let items: Vec<(&str, f64, f64)> = progress
            .items
            .iter()
            .map(|i| (i.budget.category.as_str(), i.spent, i.percentage))
            .collect();
        assert_eq!(
            items,
            vec![("Food", 800_000.0, 80.0), ("Rent", 500_000.0, 25.0), ("Fun", 0.0, 0.0)]
        );
        assert_eq!(progress.items[0].remaining, 200_000.0);

        let unbudgeted: Vec<&str> = progress
            .unbudgeted
            .iter()
            .map(|u| u.category.as_str())
            .collect();
        assert_eq!(unbudgeted, vec!["Gadgets", "Coffee"]);
    }

    #[test]
    fn test_financial_snapshot_uses_current_month() {
        let db = Database::in_memory().unwrap();
        record(&db, date(2024, 2, 1), 9_000_000.0, TransactionKind::Income, "Salary");
        record(&db, date(2024, 3, 1), 5_000_000.0, TransactionKind::Income, "Salary");
        record(&db, date(2024, 3, 2), 3_000_000.0, TransactionKind::Expense, "Rent");

        let goal = db
            .insert_goal(&NewGoal {
                name: "Bike".to_string(),
                target_amount: 900_000.0,
                current_amount: 100_000.0,
                target_date: Some(date(2024, 6, 1)),
            })
            .unwrap();

        let snapshot = db.financial_snapshot(&goal, date(2024, 3, 20)).unwrap();
        assert_eq!(snapshot.monthly_income, 5_000_000.0);
        assert_eq!(snapshot.monthly_expense, 3_000_000.0);
        assert_eq!(snapshot.amount_needed(), 800_000.0);
        assert_eq!(snapshot.target_date, Some(date(2024, 6, 1)));
    }
}
