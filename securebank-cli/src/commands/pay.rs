//! Pay command - international payment submission

use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use securebank_core::{
    Currency, LogEvent, PaymentDraft, Provider, Resolution, Route, SubmissionState,
};

use crate::output;

use super::{get_context, get_logger, log_event};

pub fn run(
    amount: Option<String>,
    currency: &str,
    provider: &str,
    payee_name: Option<String>,
    payee_account: Option<String>,
    swift_code: Option<String>,
    description: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    if let Resolution::Redirect(_) = ctx.resolve(Route::Payment) {
        output::error("Please sign in first.");
        std::process::exit(1);
    }

    let currency = Currency::from_str(currency).map_err(anyhow::Error::msg)?;
    let provider = Provider::from_str(provider).map_err(anyhow::Error::msg)?;

    let amount = match amount {
        Some(a) => a,
        None => Input::new()
            .with_prompt(format!("Amount ({})", currency))
            .interact_text()?,
    };
    let payee_name = match payee_name {
        Some(p) => p,
        None => Input::new().with_prompt("Payee name").interact_text()?,
    };
    let payee_account = match payee_account {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Payee account number")
            .interact_text()?,
    };
    let swift_code = match swift_code {
        Some(s) => s,
        None => Input::new()
            .with_prompt("SWIFT code (e.g. ABNANL2A)")
            .interact_text()?,
    };
    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Payment description")
            .interact_text()?,
    };

    let draft = PaymentDraft {
        amount,
        currency,
        provider,
        payee_name,
        payee_account,
        swift_code,
        description,
    };

    if let Some(zar) = draft.zar_equivalent() {
        println!(
            "Equivalent: {} (rate: R{})",
            format!("R{}", zar).bold(),
            currency.zar_rate()
        );
    }

    let mut submission = ctx.payment_service.start(draft);

    let spinner = output::spinner("Processing payment...");
    ctx.payment_service.submit(&mut submission, &ctx.session)?;
    output::finish_spinner(spinner);

    match submission.state() {
        SubmissionState::Succeeded { record, redirect } => {
            log_event(&logger, LogEvent::new("payment_submitted").with_command("pay"));

            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
                return Ok(());
            }

            output::success("Payment submitted successfully!");
            println!(
                "  {} {} to {} via {} (payment {})",
                record.currency, record.amount, record.recipient_account, record.provider, record.id
            );
            println!(
                "Taking you to your dashboard in {} seconds...",
                redirect.delay.as_secs()
            );
            std::thread::sleep(redirect.delay);
            super::dashboard::run(false)
        }
        SubmissionState::Editing => {
            if !submission.errors().is_empty() {
                output::field_errors(submission.errors());
            }
            if let Some(message) = submission.message() {
                log_event(
                    &logger,
                    LogEvent::new("payment_failed").with_command("pay").with_error(message),
                );
                output::error(message);
                println!("{}", "Your details were kept - re-run 'sbank pay' to retry.".dimmed());
            }
            std::process::exit(1);
        }
        SubmissionState::Submitting => unreachable!("submit always settles the state"),
    }
}
