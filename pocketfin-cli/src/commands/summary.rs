//! Summary command - totals, progress meters, chart breakdown

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use pocketfin_core::services::report::{self, ChartSlice, Filter, Summary, INCOME_COLOR_CLASS};

use super::{get_context, require_session};
use crate::output;

#[derive(Debug, Serialize)]
struct SummaryView {
    summary: Summary,
    slices: Vec<ChartSlice>,
}

pub fn run(month: Option<String>, category: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = require_session(&ctx)?;

    let txs = ctx.dashboard_service.transactions(&session)?;
    let filter = Filter { month, category };
    let filtered = report::apply_filters(&txs, &filter);

    let view = SummaryView {
        summary: report::summarize(&filtered),
        slices: report::chart_slices(&filtered),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", "Summary".bold());
    println!();
    println!("  Income    {}", format!("+{}", view.summary.income).green());
    println!("  Expense   {}", format!("-{}", view.summary.expense).red());
    println!("  Balance   {}", view.summary.balance.to_string().bold());
    println!();
    println!("  Spent     {}", output::meter(view.summary.spent_pct).red());
    println!(
        "  Remaining {}",
        output::meter(view.summary.balance_pct).green()
    );

    if !view.slices.is_empty() {
        println!();
        println!("{}", "Breakdown".bold());
        let mut table = output::create_table();
        table.set_header(vec!["Group", "Total"]);
        for slice in &view.slices {
            let label = if slice.color_class == INCOME_COLOR_CLASS {
                slice.label.green().to_string()
            } else {
                slice.label.red().to_string()
            };
            table.add_row(vec![label, slice.value.to_string()]);
        }
        println!("{}", table);
    }
    Ok(())
}
