//! Application settings and environment probing.

use std::env;

use chrono_tz::Tz;


/// Name of the external usage reporting tool.
pub const USAGE_COMMAND: &str = "ccusage";

/// Refresh interval for the live view (seconds).
pub const DEFAULT_REFRESH_INTERVAL: u64 = 30;

/// Civil calendar used for period labels, regardless of host timezone.
pub const DISPLAY_TIMEZONE: Tz = chrono_tz::America::Toronto;


/// Pick the shell the usage command runs through.
///
/// Prefers the user's zsh when `$SHELL` points at one, so the command sees
/// the same PATH a login terminal would. Falls back to plain `/bin/sh`.
pub fn login_shell() -> (String, &'static [&'static str]) {
    match env::var("SHELL") {
        Ok(shell) if shell.contains("zsh") => (shell, &["-l", "-c"]),
        _ => ("/bin/sh".to_string(), &["-c"]),
    }
}
