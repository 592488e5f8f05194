//! Final pause before the process exits

use dialoguer::Input;
use std::io::{self, IsTerminal};
use tracing::debug;

/// Wait for Enter so the console output stays readable.
///
/// Skipped when stdin is not a terminal.
pub fn pause() {
    if !should_pause(&io::stdin()) {
        return;
    }

    if let Err(e) = Input::<String>::new()
        .with_prompt("Press Enter to exit")
        .allow_empty(true)
        .report(false)
        .interact_text()
    {
        debug!(error = %e, "exit prompt failed");
    }
}

/// Whether a prompt on `input` could be answered by an operator
fn should_pause(input: &impl IsTerminal) -> bool {
    input.is_terminal()
}
