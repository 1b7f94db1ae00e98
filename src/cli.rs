//! CLI definitions using clap.

use clap::{Parser, Subcommand};

use crate::commands;
use crate::models::Granularity;


/// ccglance - recent Claude Code usage and cost in the terminal
#[derive(Parser)]
#[command(name = "ccglance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Show usage for the last 7 days
    Daily {
        /// Auto-refresh the view at a fixed interval
        #[arg(long)]
        live: bool,

        /// Show per-model breakdown lines under each day
        #[arg(long)]
        expand: bool,
    },

    /// Show usage for the last 12 weeks
    Weekly {
        /// Auto-refresh the view at a fixed interval
        #[arg(long)]
        live: bool,

        /// Show per-model breakdown lines under each week
        #[arg(long)]
        expand: bool,
    },

    /// Launch macOS menu bar app (macOS only)
    #[command(name = "status-bar")]
    StatusBar {
        /// Track the 12-week window instead of the 7-day window
        #[arg(long)]
        weekly: bool,
    },
}


/// Run the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Daily { live, expand }) => {
            commands::usage::run(Granularity::Daily, live, expand)
        }
        Some(Commands::Weekly { live, expand }) => {
            commands::usage::run(Granularity::Weekly, live, expand)
        }
        Some(Commands::StatusBar { weekly }) => {
            let granularity = if weekly {
                Granularity::Weekly
            } else {
                Granularity::Daily
            };
            commands::status_bar::run(granularity)
        }
        // No subcommand runs the default daily view
        None => commands::usage::run(Granularity::Daily, false, false),
    }
}
