//! Login command

use anyhow::Result;
use dialoguer::{Input, Password};
use pocketfin_core::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(email: Option<String>, remember: bool) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.session_service.login(&email, &password, remember).await {
        Ok(session) => {
            if ctx.config.seed_starter_data {
                ctx.dashboard_service.ensure_seeded(&session)?;
            }
            log_event(&logger, LogEvent::new("login_succeeded").with_command("login"));
            output::success(&format!("Logged in as {}.", session.name));
            if !remember {
                output::info("Session lasts for this shell only; use --remember to keep it.");
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
