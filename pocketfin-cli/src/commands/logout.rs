//! Logout command

use anyhow::Result;
use pocketfin_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run() -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    ctx.session_service.logout()?;
    log_event(&logger, LogEvent::new("logout").with_command("logout"));
    output::success("Logged out.");
    Ok(())
}
