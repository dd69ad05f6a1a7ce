//! Filter & aggregation engine
//!
//! Pure functions of `(transactions, filter)` - no I/O, no session
//! state. The renderer consumes the derived outputs as-is: month and
//! category vocabularies, the filtered subsequence, summary figures,
//! and chart slices.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::{Transaction, TransactionKind};

/// Categories always offered in filters, before any data is observed
pub const BASE_CATEGORIES: [&str; 6] = ["Salary", "Food", "Travel", "Shopping", "Bills", "Other"];

/// Chart color classes, a pure function of the transaction kind
pub const INCOME_COLOR_CLASS: &str = "slice-income";
pub const EXPENSE_COLOR_CLASS: &str = "slice-expense";

/// Month/category selection; `None` means "all"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub month: Option<String>,
    pub category: Option<String>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn matches(&self, tx: &Transaction) -> bool {
        let month_ok = match &self.month {
            Some(month) => tx.month() == *month,
            None => true,
        };
        let category_ok = match &self.category {
            Some(category) => tx.category == *category,
            None => true,
        };
        month_ok && category_ok
    }
}

/// Distinct `YYYY-MM` prefixes, most recent first
pub fn available_months(txs: &[Transaction]) -> Vec<String> {
    let months: BTreeSet<String> = txs.iter().map(|t| t.month()).collect();
    months.into_iter().rev().collect()
}

/// Base vocabulary plus every observed category, ascending lexical order
pub fn available_categories(txs: &[Transaction]) -> Vec<String> {
    let mut categories: BTreeSet<String> =
        BASE_CATEGORIES.iter().map(|c| c.to_string()).collect();
    categories.extend(txs.iter().map(|t| t.category.clone()));
    categories.into_iter().collect()
}

/// Materialize the filtered subsequence
pub fn apply_filters(txs: &[Transaction], filter: &Filter) -> Vec<Transaction> {
    txs.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Summary figures for the filtered subsequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    /// Share of income spent, 0-100
    pub spent_pct: u32,
    /// Share of income remaining, 0-100, shown as a magnitude even
    /// when the balance is negative
    pub balance_pct: u32,
}

/// Sum income/expense and derive the two progress percentages
pub fn summarize(txs: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for tx in txs {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.amount,
        }
    }
    let balance = income - expense;

    let spent_pct = if income.is_zero() {
        if expense.is_zero() {
            0
        } else {
            100
        }
    } else {
        percentage(expense, income).clamp(0, 100) as u32
    };

    let balance_pct = if income.is_zero() {
        0
    } else {
        percentage(balance, income).clamp(-100, 100).unsigned_abs() as u32
    };

    Summary {
        income,
        expense,
        balance,
        spent_pct,
        balance_pct,
    }
}

// round(n / d * 100) with half-away-from-zero, the original display math
fn percentage(n: Decimal, d: Decimal) -> i64 {
    (n / d * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// One pie-chart segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
    pub color_class: &'static str,
}

/// Group by the `type:category` composite key, keys in lexical order,
/// each group summed
pub fn chart_slices(txs: &[Transaction]) -> Vec<ChartSlice> {
    let mut groups: BTreeMap<String, (Decimal, TransactionKind)> = BTreeMap::new();
    for tx in txs {
        let key = format!("{}:{}", tx.kind.as_str(), tx.category);
        let entry = groups.entry(key).or_insert((Decimal::ZERO, tx.kind));
        entry.0 += tx.amount;
    }

    groups
        .into_iter()
        .map(|(label, (value, kind))| ChartSlice {
            label,
            value,
            color_class: match kind {
                TransactionKind::Income => INCOME_COLOR_CLASS,
                TransactionKind::Expense => EXPENSE_COLOR_CLASS,
            },
        })
        .collect()
}

/// Order for tabular display: date descending, ties keep insertion order
pub fn sort_for_table(txs: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = txs.to_vec();
    // sort_by is stable, so same-date records stay in insertion order
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
