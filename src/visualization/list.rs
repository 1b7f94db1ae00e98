//! List rendering for the usage window.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::aggregation::ModelSummary;
use crate::models::{Granularity, ModelFamily, UsageEntry};


// Constants
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";


/// Format number with thousands suffix.
pub fn format_number(num: i64) -> String {
    if num >= 1_000_000_000 {
        format!("{:.1}bn", num as f64 / 1_000_000_000.0)
    } else if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        format!("{}", num)
    }
}


/// ANSI color for a model family's indicator glyph.
pub fn family_color(family: ModelFamily) -> &'static str {
    match family {
        ModelFamily::Opus => MAGENTA,
        ModelFamily::Sonnet => CYAN,
        ModelFamily::Haiku => GREEN,
        ModelFamily::Other => DIM,
    }
}


/// Short label for a period identifier, e.g. "Aug 3".
///
/// The identifier is taken as a UTC-midnight instant and rendered in the
/// given civil calendar, so labels are stable across host timezones.
/// Identifiers that do not parse render verbatim.
pub fn format_period_label(date: &str, tz: Tz) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => {
            let midnight = Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN));
            midnight.with_timezone(&tz).format("%b %-d").to_string()
        }
        Err(_) => date.to_string(),
    }
}


/// Multi-line tooltip block for one period entry.
pub fn entry_tooltip(entry: &UsageEntry, tz: Tz) -> String {
    let mut lines = vec![format!(
        "{}  ${:.2}  {} tokens",
        format_period_label(&entry.date, tz),
        entry.total_cost,
        format_number(entry.total_tokens),
    )];

    for breakdown in &entry.breakdowns {
        lines.push(format!(
            "{}●{} ${:.2} {}",
            family_color(breakdown.family()),
            RESET,
            breakdown.cost,
            breakdown.model_name,
        ));
    }

    lines.join("\n")
}


/// Render the period list plus the per-family totals section.
pub fn render_usage_list(
    entries: &[UsageEntry],
    summary: &[ModelSummary],
    granularity: Granularity,
    tz: Tz,
    expand: bool,
    clear_screen: bool,
) {
    if clear_screen {
        print!("\x1b[2J\x1b[H"); // Clear screen and move cursor to top
    }

    println!(
        "{}Claude Code usage{} {}({}){}",
        BOLD,
        RESET,
        DIM,
        granularity.window_label(),
        RESET
    );
    println!();

    if expand {
        // Expanded view shows each period as its full tooltip block
        for entry in entries {
            println!("{}", entry_tooltip(entry, tz));
            println!();
        }
    } else {
        for entry in entries {
            println!(
                "  {}{:<8}{} ${:>9}  {:>8} tokens",
                BOLD,
                format_period_label(&entry.date, tz),
                RESET,
                format!("{:.2}", entry.total_cost),
                format_number(entry.total_tokens),
            );
        }
    }

    if !summary.is_empty() {
        println!();
        println!("{}Totals by model{}", BOLD, RESET);
        for row in summary {
            println!(
                "  {}●{} {:<7} ${:>9}  {:>8} tokens",
                family_color(row.family),
                RESET,
                row.family.label(),
                format!("{:.2}", row.cost),
                format_number(row.total_tokens),
            );
        }
    }
}


/// Render a refresh failure below whatever is already on screen.
pub fn render_error(message: &str) {
    println!();
    println!("{}{}! {}{}", BOLD, RED, message, RESET);
}


/// Footer hint for the live view.
pub fn render_refresh_hint(interval_secs: u64) {
    println!();
    println!(
        "{}Refreshing every {} seconds. Press Ctrl+C to exit.{}",
        DIM, interval_secs, RESET
    );
}
