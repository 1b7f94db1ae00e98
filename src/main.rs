//! ccglance - recent Claude Code usage in the terminal
//!
//! Shells out to the ccusage CLI and renders the trailing usage window.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod error;
mod models;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
