//! Register command - create a new account

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use securebank_core::{Error, LogEvent, RegistrationDraft};

use crate::output;

use super::{get_context, get_logger, log_event};

pub fn run(
    full_name: Option<String>,
    id_number: Option<String>,
    account_number: Option<String>,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let full_name = match full_name {
        Some(n) => n,
        None => Input::new().with_prompt("Full name").interact_text()?,
    };
    let id_number = match id_number {
        Some(i) => i,
        None => Input::new()
            .with_prompt("ID number (13 digits)")
            .interact_text()?,
    };
    let account_number = match account_number {
        Some(a) => a,
        None => Input::new()
            .with_prompt("Account number (10-20 digits)")
            .interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password (8+ chars, A-z, 0-9, @$!%*?&)")
        .interact()?;
    let confirm_password = Password::new()
        .with_prompt("Confirm password")
        .interact()?;

    let draft = RegistrationDraft {
        full_name,
        id_number,
        account_number,
        password,
        confirm_password,
    };

    let spinner = output::spinner("Creating account...");
    let result = ctx.auth_service.register(&draft);
    output::finish_spinner(spinner);

    match result {
        Ok(()) => {
            log_event(&logger, LogEvent::new("registration_succeeded").with_command("register"));
            output::success("Registration successful!");
            println!("Sign in with '{}'.", "sbank login".bold());
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
                LogEvent::new("registration_failed")
                    .with_command("register")
                    .with_error(&message),
            );
            output::error(&message);
            std::process::exit(1);
        }
    }
}
