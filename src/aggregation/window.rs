//! Trailing window selection over normalized usage entries.

use chrono::NaiveDate;

use crate::models::{Granularity, UsageEntry};


/// Keep entries inside the trailing window, newest first.
///
/// Entries whose period date is before the cutoff, or does not parse, are
/// dropped. The sort is stable, so entries sharing a date keep their
/// original order. Daily windows are capped to the 7 most recent entries
/// after sorting.
pub fn filter_recent(
    entries: Vec<UsageEntry>,
    granularity: Granularity,
    today: NaiveDate,
) -> Vec<UsageEntry> {
    let cutoff = granularity.cutoff(today);

    let mut kept: Vec<UsageEntry> = entries
        .into_iter()
        .filter(|e| e.period_date().map_or(false, |d| d >= cutoff))
        .collect();

    kept.sort_by(|a, b| b.period_date().cmp(&a.period_date()));

    if let Some(cap) = granularity.entry_cap() {
        kept.truncate(cap);
    }

    kept
}
