//! Normalized usage models built from ccusage report records.

use chrono::{Duration, NaiveDate};


/// Reporting granularity of the upstream tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
}


impl Granularity {
    /// Argument passed to the ccusage CLI.
    pub fn cli_argument(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
        }
    }

    /// Earliest period date still inside the trailing window.
    ///
    /// Daily: today minus 6 days, a 7-entry window including today.
    /// Weekly: today minus 12 weeks.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => today - Duration::days(6),
            Granularity::Weekly => today - Duration::weeks(12),
        }
    }

    /// Maximum entries kept after sorting, where the window is capped.
    pub fn entry_cap(&self) -> Option<usize> {
        match self {
            Granularity::Daily => Some(7),
            Granularity::Weekly => None,
        }
    }

    /// Human label for the window, used in headers.
    pub fn window_label(&self) -> &'static str {
        match self {
            Granularity::Daily => "last 7 days",
            Granularity::Weekly => "last 12 weeks",
        }
    }
}


/// Coarse classification bucket for a model name.
///
/// Classification is a deliberate ordered substring match so that the
/// upstream tool's free-text naming keeps working without a model registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Opus,
    Sonnet,
    Haiku,
    Other,
}


impl ModelFamily {
    /// Fixed display order for summary rows.
    pub const DISPLAY_ORDER: [ModelFamily; 4] = [
        ModelFamily::Opus,
        ModelFamily::Sonnet,
        ModelFamily::Haiku,
        ModelFamily::Other,
    ];

    /// Substring rules evaluated in priority order, case-sensitive.
    const RULES: [(&'static str, ModelFamily); 3] = [
        ("sonnet", ModelFamily::Sonnet),
        ("haiku", ModelFamily::Haiku),
        ("opus", ModelFamily::Opus),
    ];

    /// Classify a model name, falling back to `Other`.
    pub fn classify(model_name: &str) -> Self {
        for (keyword, family) in Self::RULES {
            if model_name.contains(keyword) {
                return family;
            }
        }
        ModelFamily::Other
    }

    /// Display label for summary rows.
    pub fn label(&self) -> &'static str {
        match self {
            ModelFamily::Opus => "Opus",
            ModelFamily::Sonnet => "Sonnet",
            ModelFamily::Haiku => "Haiku",
            ModelFamily::Other => "Other",
        }
    }

    /// Index into accumulator arrays laid out in display order.
    pub fn bucket_index(&self) -> usize {
        match self {
            ModelFamily::Opus => 0,
            ModelFamily::Sonnet => 1,
            ModelFamily::Haiku => 2,
            ModelFamily::Other => 3,
        }
    }
}


/// Usage attributed to one named model within a period.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelBreakdown {
    pub model_name: String,
    pub cost: f64,
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub cache_creation_tokens: i64,
    pub cache_read_tokens: i64,
    pub total_tokens: i64,
}


impl ModelBreakdown {
    /// Family bucket, re-derived from the name on every call.
    pub fn family(&self) -> ModelFamily {
        ModelFamily::classify(&self.model_name)
    }

    /// Sum of the four token categories.
    pub fn summed_tokens(&self) -> i64 {
        self.input_tokens
            + self.output_tokens
            + self.cache_creation_tokens
            + self.cache_read_tokens
    }
}


/// One reporting period (a calendar day or a week start) after
/// normalization. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct UsageEntry {
    pub date: String,
    pub total_cost: f64,
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub total_tokens: i64,
    pub breakdowns: Vec<ModelBreakdown>,
}


impl UsageEntry {
    /// Parse the period identifier as a calendar date.
    ///
    /// Identifiers that do not parse are treated as outside any window.
    pub fn period_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_families() {
        assert_eq!(
            ModelFamily::classify("claude-3-5-sonnet-20241022"),
            ModelFamily::Sonnet
        );
        assert_eq!(
            ModelFamily::classify("claude-3-opus-20240229"),
            ModelFamily::Opus
        );
        assert_eq!(
            ModelFamily::classify("claude-haiku-4-5-20251001"),
            ModelFamily::Haiku
        );
        assert_eq!(ModelFamily::classify("gpt-4o"), ModelFamily::Other);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(ModelFamily::classify("SONNET"), ModelFamily::Other);
    }

    #[test]
    fn test_classify_priority_order() {
        // "sonnet" wins over "opus" because it is evaluated first
        assert_eq!(
            ModelFamily::classify("opus-to-sonnet-router"),
            ModelFamily::Sonnet
        );
    }

    #[test]
    fn test_classify_is_pure() {
        for _ in 0..3 {
            assert_eq!(ModelFamily::classify("gpt-4o"), ModelFamily::Other);
        }
    }

    #[test]
    fn test_summed_tokens() {
        let breakdown = ModelBreakdown {
            model_name: "claude-3-5-sonnet-20241022".to_string(),
            cost: 1.25,
            input_tokens: 100,
            output_tokens: 50,
            cache_creation_tokens: 10,
            cache_read_tokens: 5,
            total_tokens: 165,
        };
        assert_eq!(breakdown.summed_tokens(), 165);
    }

    #[test]
    fn test_daily_cutoff_keeps_seven_days() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let cutoff = Granularity::Daily.cutoff(today);
        assert_eq!(cutoff, NaiveDate::from_ymd_opt(2025, 7, 29).unwrap());
    }

    #[test]
    fn test_weekly_cutoff() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let cutoff = Granularity::Weekly.cutoff(today);
        assert_eq!(cutoff, NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());
    }

    #[test]
    fn test_period_date_rejects_garbage() {
        let entry = UsageEntry {
            date: "not-a-date".to_string(),
            total_cost: 0.0,
            input_tokens: 0,
            output_tokens: 0,
            total_tokens: 0,
            breakdowns: Vec::new(),
        };
        assert!(entry.period_date().is_none());
    }
}
