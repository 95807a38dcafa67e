//! Logs command - view recent client log events

use anyhow::Result;
use colored::Colorize;

use crate::output;

use super::get_logger;

pub fn run(limit: usize, errors_only: bool) -> Result<()> {
    let Some(logger) = get_logger() else {
        output::error("Could not open the log file.");
        std::process::exit(1);
    };

    let entries = if errors_only {
        logger.get_errors(limit)?
    } else {
        logger.get_recent(limit)?
    };

    if entries.is_empty() {
        println!("{}", "No log entries.".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Command", "Error"]);
    for entry in &entries {
        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.event.clone(),
            entry.command.clone().unwrap_or_default(),
            entry.error_message.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table);
    println!("{} entries ({})", entries.len(), logger.log_path().display());

    Ok(())
}

/// Render a unix-ms timestamp as UTC date and time
fn format_timestamp(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}
