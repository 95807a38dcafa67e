//! SecureBank CLI - international payments in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{dashboard, login, logout, logs, pay, register};

/// SecureBank - secure international payments in your terminal
#[derive(Parser)]
#[command(name = "sbank", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in to your account
    Login {
        /// Account number
        #[arg(long)]
        account_number: Option<String>,
    },

    /// Create a new account
    Register {
        /// Full name
        #[arg(long)]
        full_name: Option<String>,
        /// ID number (13 digits)
        #[arg(long)]
        id_number: Option<String>,
        /// Account number (10-20 digits)
        #[arg(long)]
        account_number: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show account overview and recent transactions
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send an international payment
    Pay {
        /// Payment amount
        #[arg(long)]
        amount: Option<String>,
        /// Currency (USD, EUR, GBP, JPY, AUD)
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Provider (SWIFT, CORRESPONDENT)
        #[arg(long, default_value = "SWIFT")]
        provider: String,
        /// Payee name
        #[arg(long)]
        payee_name: Option<String>,
        /// Payee account number
        #[arg(long)]
        payee_account: Option<String>,
        /// SWIFT code (e.g. ABNANL2A)
        #[arg(long)]
        swift_code: Option<String>,
        /// Payment description (required for compliance)
        #[arg(long)]
        description: Option<String>,
        /// Output the created payment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent client log events
    Logs {
        /// Number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Only show entries with errors
        #[arg(long)]
        errors: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { account_number } => login::run(account_number),
        Commands::Register {
            full_name,
            id_number,
            account_number,
        } => register::run(full_name, id_number, account_number),
        Commands::Logout => logout::run(),
        Commands::Dashboard { json } => dashboard::run(json),
        Commands::Pay {
            amount,
            currency,
            provider,
            payee_name,
            payee_account,
            swift_code,
            description,
            json,
        } => pay::run(
            amount,
            &currency,
            &provider,
            payee_name,
            payee_account,
            swift_code,
            description,
            json,
        ),
        Commands::Logs { limit, errors } => logs::run(limit, errors),
    }
}
