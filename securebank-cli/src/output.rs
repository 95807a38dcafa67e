//! Output formatting utilities

use std::time::Duration;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use securebank_core::FieldErrors;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print field-level validation errors, one per line
pub fn field_errors(errors: &FieldErrors) {
    eprintln!("{}", "Please fix the following:".red());
    for (field, message) in errors.iter() {
        eprintln!("  {} {}", format!("{}:", field).yellow(), message);
    }
}

/// Spinner shown while a request is in flight. Returns None when stdout is
/// not a terminal so piped output stays clean.
pub fn spinner(message: &str) -> Option<ProgressBar> {
    if !atty::is(atty::Stream::Stdout) {
        return None;
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()));
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

pub fn finish_spinner(bar: Option<ProgressBar>) {
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}

/// Status label with its dashboard color
pub fn colored_status(status: &str) -> String {
    match status {
        "Completed" => status.green().to_string(),
        "Verified" => status.cyan().to_string(),
        _ => status.yellow().to_string(),
    }
}
