//! Register command - create an account and log in

use anyhow::Result;
use dialoguer::{Input, Password};
use pocketfin_core::{LogEvent, RegisterRequest};

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(name: Option<String>, email: Option<String>) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;

    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;
    let confirm = Password::new().with_prompt("Confirm password").interact()?;

    let req = RegisterRequest {
        name,
        email,
        password,
        confirm,
    };

    match ctx.session_service.register(&req).await {
        Ok(session) => {
            if ctx.config.seed_starter_data {
                ctx.dashboard_service.ensure_seeded(&session)?;
            }
            log_event(
                &logger,
                LogEvent::new("register_succeeded").with_command("register"),
            );
            output::success(&format!(
                "Welcome, {}! You are now logged in.",
                session.name
            ));
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
