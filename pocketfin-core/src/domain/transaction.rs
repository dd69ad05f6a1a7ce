//! Transaction domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a transaction adds to or subtracts from the balance
///
/// The sign of an amount is carried here, never in the amount itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// A single income or expense record belonging to one user's partition
///
/// Stored blob layout matches the `pf_dashboard_v1_<userId>` contract:
/// the kind serializes under the `type` key and the amount as a JSON
/// number. Records are immutable once created; there is no edit flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    ///
    /// The stored amount is always the absolute value of the input; the
    /// sign is implied by `kind`.
    pub fn new(
        title: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            amount: amount.abs(),
            date,
            category: category.into(),
            kind,
        }
    }

    /// `YYYY-MM` prefix of the transaction date, the month-filter key
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
