//! External command execution for the ccusage CLI.

use std::process::Command;

use crate::config::{login_shell, USAGE_COMMAND};
use crate::error::UsageError;
use crate::models::Granularity;


/// Build the fixed report command for a granularity.
pub fn usage_command(granularity: Granularity) -> String {
    format!("{} {} --json", USAGE_COMMAND, granularity.cli_argument())
}


/// Fetch the raw JSON report text for a granularity.
pub fn fetch_report(granularity: Granularity) -> Result<String, UsageError> {
    run_shell_command(&usage_command(granularity))
}


/// Run a command line through the user's shell and return trimmed stdout.
///
/// The command fails only when it wrote to its error stream and produced no
/// usable standard output; exit status alone is not treated as failure.
/// Runs to natural completion, with no timeout and no retry.
pub fn run_shell_command(command: &str) -> Result<String, UsageError> {
    let (shell, flags) = login_shell();

    let output = Command::new(&shell)
        .args(flags)
        .arg(command)
        .output()
        .map_err(|e| UsageError::Execution(format!("failed to launch {shell}: {e}")))?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if stdout.is_empty() && !stderr.is_empty() {
        return Err(UsageError::Execution(stderr));
    }

    Ok(stdout)
}
