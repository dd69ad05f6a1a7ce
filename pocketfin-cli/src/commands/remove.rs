//! Remove command - delete a transaction by id

use anyhow::Result;
use pocketfin_core::LogEvent;

use super::{get_context, get_logger, log_event, require_session};
use crate::output;

pub fn run(id: &str) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;
    let session = require_session(&ctx)?;

    if ctx.dashboard_service.remove(&session, id)? {
        log_event(
            &logger,
            LogEvent::new("transaction_removed").with_command("remove"),
        );
        output::success("Transaction removed.");
    } else {
        output::info("No transaction with that id.");
    }
    Ok(())
}
