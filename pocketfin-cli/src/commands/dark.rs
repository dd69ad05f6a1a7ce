//! Dark command - toggle the dark mode preference

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(state: &str) -> Result<()> {
    let ctx = get_context()?;
    let on = state == "on";
    ctx.preference_service.set_dark_mode(on)?;
    output::success(&format!("Dark mode {}.", if on { "enabled" } else { "disabled" }));
    Ok(())
}
