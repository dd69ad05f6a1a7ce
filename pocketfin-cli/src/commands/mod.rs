//! CLI command implementations

pub mod add;
pub mod dark;
pub mod list;
pub mod login;
pub mod logout;
pub mod register;
pub mod remove;
pub mod status;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketfin_core::{EntryPoint, LogEvent, LoggingService, PocketfinContext, Session};

/// Get the data directory from environment or default
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("POCKETFIN_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".pocketfin")
    }
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get or create the pocketfin context
pub fn get_context() -> Result<PocketfinContext> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
    PocketfinContext::new(&data_dir).context("Failed to initialize pocketfin context")
}

/// Restore the active session or fail with a hint
pub fn require_session(ctx: &PocketfinContext) -> Result<Session> {
    ctx.session_service
        .restore()?
        .context("Not logged in. Run `pf login` or `pf register` first.")
}
