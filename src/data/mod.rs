//! Data access layer: external command execution and the JSON parse boundary.

mod fetcher;
mod report;

#[allow(unused_imports)]
pub use fetcher::{fetch_report, run_shell_command, usage_command};
pub use report::parse_report;
