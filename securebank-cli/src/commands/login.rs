//! Login command - sign in and store the session token

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use securebank_core::{Error, LogEvent, LoginDraft};

use crate::output;

use super::{get_context, get_logger, log_event};

pub fn run(account_number: Option<String>) -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    let account_number = match account_number {
        Some(a) => a,
        None => Input::new()
            .with_prompt("Account number")
            .interact_text()?,
    };

    let password = Password::new().with_prompt("Password").interact()?;

    let draft = LoginDraft {
        account_number,
        password,
    };

    let spinner = output::spinner("Signing in...");
    let result = ctx.auth_service.login(&draft, &mut ctx.session);
    output::finish_spinner(spinner);

    match result {
        Ok(()) => {
            log_event(&logger, LogEvent::new("login_succeeded").with_command("login"));
            output::success(&format!("Welcome back, {}!", ctx.session.display_name()));
            println!("Run '{}' to see your account overview.", "sbank dashboard".bold());
            Ok(())
        }
        Err(Error::Validation(errors)) => {
            output::field_errors(&errors);
            std::process::exit(1);
        }
        Err(e) => {
            let message = e.user_message();
            log_event(
                &logger,
                LogEvent::new("login_failed").with_command("login").with_error(&message),
            );
            output::error(&message);
            std::process::exit(1);
        }
    }
}
