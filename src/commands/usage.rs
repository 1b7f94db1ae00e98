//! Usage list command: one-shot and live refresh.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;

use crate::aggregation::{filter_recent, summarize, ModelSummary};
use crate::config::{DEFAULT_REFRESH_INTERVAL, DISPLAY_TIMEZONE};
use crate::data::{fetch_report, parse_report};
use crate::error::UsageError;
use crate::models::{Granularity, UsageEntry};
use crate::visualization::{render_error, render_refresh_hint, render_usage_list};


/// Result of one successful refresh, replaced wholesale each cycle.
#[derive(Debug, Clone)]
pub struct UsageSnapshot {
    pub entries: Vec<UsageEntry>,
    pub summary: Vec<ModelSummary>,
}


/// State owned by the command loop.
///
/// A failed refresh keeps the previous snapshot on screen; only the error
/// message is updated. There are no partial updates.
#[derive(Debug, Default)]
pub struct DashboardState {
    snapshot: Option<UsageSnapshot>,
    last_error: Option<String>,
}


impl DashboardState {
    /// Apply one refresh outcome.
    pub fn apply(&mut self, result: Result<UsageSnapshot, UsageError>) {
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn snapshot(&self) -> Option<&UsageSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}


/// Fetch, parse, window and summarize one granularity.
pub fn refresh(granularity: Granularity) -> Result<UsageSnapshot, UsageError> {
    let raw = fetch_report(granularity)?;
    let entries = parse_report(&raw, granularity)?;

    let today = Local::now().date_naive();
    let entries = filter_recent(entries, granularity, today);
    let summary = summarize(&entries);

    Ok(UsageSnapshot { entries, summary })
}


/// Run the usage command.
pub fn run(granularity: Granularity, live: bool, expand: bool) -> Result<()> {
    let mut state = DashboardState::default();

    if !live {
        state.apply(refresh(granularity));
        // One-shot failures surface through main's error path
        if let (None, Some(message)) = (state.snapshot(), state.last_error()) {
            anyhow::bail!("{message}");
        }
        display(&state, granularity, expand, false);
        return Ok(());
    }

    loop {
        state.apply(refresh(granularity));
        display(&state, granularity, expand, true);
        thread::sleep(Duration::from_secs(DEFAULT_REFRESH_INTERVAL));
    }
}


/// Render the current state once.
fn display(state: &DashboardState, granularity: Granularity, expand: bool, live: bool) {
    if let Some(snapshot) = state.snapshot() {
        render_usage_list(
            &snapshot.entries,
            &snapshot.summary,
            granularity,
            DISPLAY_TIMEZONE,
            expand,
            live, // clear screen between live refreshes
        );
    }

    if let Some(message) = state.last_error() {
        render_error(message);
    }

    if live {
        render_refresh_hint(DEFAULT_REFRESH_INTERVAL);
    }
}
