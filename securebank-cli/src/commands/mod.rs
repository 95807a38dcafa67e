//! CLI command implementations

pub mod dashboard;
pub mod login;
pub mod logout;
pub mod logs;
pub mod pay;
pub mod register;

use std::path::PathBuf;

use anyhow::{Context, Result};
use securebank_core::{BankContext, LogEvent, LoggingService};

/// Get the app directory from environment or default
pub fn get_bank_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SECUREBANK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".securebank")
    }
}

/// Get or create the bank context
pub fn get_context() -> Result<BankContext> {
    let bank_dir = get_bank_dir();

    std::fs::create_dir_all(&bank_dir)
        .with_context(|| format!("Failed to create app directory: {:?}", bank_dir))?;

    BankContext::new(&bank_dir).context("Failed to initialize SecureBank client")
}

/// Get the logging service for CLI operations
///
/// Returns None if the app directory can't be created (logging should never
/// block an operation)
pub fn get_logger() -> Option<LoggingService> {
    let bank_dir = get_bank_dir();
    std::fs::create_dir_all(&bank_dir).ok()?;
    Some(LoggingService::new(&bank_dir, env!("CARGO_PKG_VERSION")))
}

/// Log an event, ignoring any errors
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}
