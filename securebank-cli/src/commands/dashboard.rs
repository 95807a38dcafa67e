//! Dashboard command - account overview and recent transactions

use anyhow::Result;
use colored::Colorize;
use securebank_core::{Error, LogEvent, Resolution, Route};

use crate::output;

use super::{get_context, get_logger, log_event};

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    if let Resolution::Redirect(route) = ctx.resolve(Route::Dashboard) {
        output::error(&format!("Please sign in first ({}).", route.path()));
        std::process::exit(1);
    }

    let spinner = output::spinner("Loading dashboard...");
    let result = ctx.dashboard_service.overview(&ctx.session);
    output::finish_spinner(spinner);

    let overview = match result {
        Ok(overview) => overview,
        Err(e) => {
            let message = match &e {
                Error::Auth(_) | Error::Network(_) => e.user_message(),
                other => other.to_string(),
            };
            log_event(
                &logger,
                LogEvent::new("dashboard_failed").with_command("dashboard").with_error(&message),
            );
            output::error(&message);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    println!("Good day, {}!", overview.greeting_name.bold());
    println!();

    println!("{}", "Account Summary".bold());
    let mut table = output::create_table();
    table.add_row(vec!["Available Balance", &format!("R {:.2}", overview.account.balance)]);
    table.add_row(vec!["Account Number", &overview.account.account_number]);
    table.add_row(vec!["Account Type", &overview.account.account_type]);
    println!("{}", table);
    println!();

    println!(
        "{} ({} transactions)",
        "Recent Transactions".bold(),
        overview.transaction_count
    );

    if overview.transactions.is_empty() {
        println!("{}", "No transactions found.".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Description", "Amount", "Status"]);
    for tx in &overview.transactions {
        table.add_row(vec![
            tx.date.clone(),
            tx.description.clone(),
            format!("-{} {}", tx.currency, tx.amount),
            output::colored_status(tx.status),
        ]);
    }
    println!("{}", table);

    Ok(())
}
