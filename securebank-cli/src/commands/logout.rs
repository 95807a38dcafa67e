//! Logout command - clear the stored session

use anyhow::Result;
use securebank_core::LogEvent;

use crate::output;

use super::{get_context, get_logger, log_event};

pub fn run() -> Result<()> {
    let mut ctx = get_context()?;
    let logger = get_logger();

    if !ctx.session.is_authenticated() {
        output::info("You are not signed in.");
        return Ok(());
    }

    ctx.auth_service.logout(&mut ctx.session)?;
    log_event(&logger, LogEvent::new("logout").with_command("logout"));
    output::success("Signed out.");
    Ok(())
}
