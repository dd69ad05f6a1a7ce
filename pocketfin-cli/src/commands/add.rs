//! Add command - record a transaction

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use pocketfin_core::{LogEvent, TransactionDraft, TransactionKind};

use super::{get_context, get_logger, log_event, require_session};
use crate::output;
use crate::KindArg;

pub fn run(
    title: &str,
    amount: &str,
    date: Option<&str>,
    category: &str,
    kind: KindArg,
) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;
    let session = require_session(&ctx)?;

    let amount = Decimal::from_str(amount)
        .with_context(|| format!("'{}' is not a valid amount", amount))?;
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("'{}' is not a YYYY-MM-DD date", raw))?,
        None => Utc::now().date_naive(),
    };
    let kind = match kind {
        KindArg::Income => TransactionKind::Income,
        KindArg::Expense => TransactionKind::Expense,
    };

    let draft = TransactionDraft {
        title: title.to_string(),
        amount,
        date,
        category: category.to_string(),
        kind,
    };

    let tx = ctx.dashboard_service.add(&session, &draft)?;
    log_event(&logger, LogEvent::new("transaction_added").with_command("add"));
    output::success(&format!(
        "Recorded {} of {} on {} (id {})",
        tx.kind.as_str(),
        tx.amount,
        tx.date,
        tx.id
    ));
    Ok(())
}
