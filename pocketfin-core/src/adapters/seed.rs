//! Starter data for first-login seeding
//!
//! A freshly authenticated user with an empty partition gets this fixed
//! set so the dashboard is never blank on first use. Dates are relative
//! to today so the current and previous month are both populated.

use chrono::{Datelike, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::{Transaction, TransactionKind};

/// Generate the starter transaction set
pub fn starter_transactions() -> Vec<Transaction> {
    let today = Utc::now().date_naive();
    let first_of_month = today.with_day(1).unwrap_or(today);
    let prev_month = (first_of_month - Duration::days(1))
        .with_day(1)
        .unwrap_or(first_of_month);

    vec![
        Transaction::new(
            "Monthly salary",
            Decimal::new(320000, 2),
            first_of_month,
            "Salary",
            TransactionKind::Income,
        ),
        Transaction::new(
            "Groceries run",
            Decimal::new(8240, 2),
            today - Duration::days(2),
            "Food",
            TransactionKind::Expense,
        ),
        Transaction::new(
            "Bus pass",
            Decimal::new(4900, 2),
            today - Duration::days(5),
            "Travel",
            TransactionKind::Expense,
        ),
        Transaction::new(
            "Electricity bill",
            Decimal::new(9610, 2),
            today - Duration::days(8),
            "Bills",
            TransactionKind::Expense,
        ),
        Transaction::new(
            "New headphones",
            Decimal::new(5999, 2),
            prev_month + Duration::days(9),
            "Shopping",
            TransactionKind::Expense,
        ),
        Transaction::new(
            "Freelance article",
            Decimal::new(24000, 2),
            prev_month + Duration::days(14),
            "Other",
            TransactionKind::Income,
        ),
    ]
}
