//! List command - filtered transaction table, newest first

use anyhow::Result;

use pocketfin_core::services::report::{self, Filter};
use pocketfin_core::TransactionKind;

use super::{get_context, require_session};
use crate::output;

pub fn run(month: Option<String>, category: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let session = require_session(&ctx)?;

    let txs = ctx.dashboard_service.transactions(&session)?;
    let filter = Filter {
        month,
        category,
    };
    let filtered = report::sort_for_table(&report::apply_filters(&txs, &filter));

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        output::info("No transactions match.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Title", "Category", "Type", "Amount", "Id"]);
    for tx in &filtered {
        table.add_row(vec![
            tx.date.to_string(),
            tx.title.clone(),
            tx.category.clone(),
            tx.kind.as_str().to_string(),
            output::amount_cell(tx.amount, tx.kind == TransactionKind::Income),
            tx.id.clone(),
        ]);
    }
    println!("{}", table);
    Ok(())
}
