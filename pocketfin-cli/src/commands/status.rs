//! Status command - active session and dashboard overview

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use pocketfin_core::services::report;
use pocketfin_core::Session;

use super::{get_context, require_session};
use crate::output;

#[derive(Debug, Serialize)]
struct StatusView {
    session: Session,
    transactions: usize,
    months: Vec<String>,
    categories: Vec<String>,
    dark_mode: bool,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = require_session(&ctx)?;

    let txs = ctx.dashboard_service.transactions(&session)?;
    let view = StatusView {
        months: report::available_months(&txs),
        categories: report::available_categories(&txs),
        transactions: txs.len(),
        dark_mode: ctx.preference_service.dark_mode()?,
        session,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", "Pocketfin Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["User", &view.session.name]);
    table.add_row(vec!["Email", &view.session.email]);
    table.add_row(vec!["Transactions", &view.transactions.to_string()]);
    table.add_row(vec!["Months", &view.months.join(", ")]);
    table.add_row(vec![
        "Dark mode",
        if view.dark_mode { "on" } else { "off" },
    ]);
    println!("{}", table);
    println!();

    println!("Categories: {}", view.categories.join(", "));
    Ok(())
}
