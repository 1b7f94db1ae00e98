//! Parse boundary for the ccusage JSON report.
//!
//! Upstream fields are loosely typed, so everything lands in a schema of
//! explicit optionals here and is defaulted before it reaches aggregation.

use serde::Deserialize;

use crate::error::UsageError;
use crate::models::{Granularity, ModelBreakdown, UsageEntry};


/// Report envelope. Only the key matching the requested granularity is read.
#[derive(Debug, Deserialize)]
struct RawReport {
    daily: Option<Vec<RawPeriod>>,
    weekly: Option<Vec<RawPeriod>>,
}


/// One period record as emitted by ccusage.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPeriod {
    /// Weekly reports identify the period by its week start date.
    #[serde(alias = "week")]
    date: String,
    total_cost: Option<f64>,
    input_tokens: Option<i64>,
    output_tokens: Option<i64>,
    total_tokens: Option<i64>,
    #[serde(default)]
    model_breakdowns: Vec<RawBreakdown>,
}


/// Per-model figures inside a period record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBreakdown {
    model_name: String,
    cost: Option<f64>,
    input_tokens: Option<i64>,
    output_tokens: Option<i64>,
    cache_creation_tokens: Option<i64>,
    cache_read_tokens: Option<i64>,
    total_tokens: Option<i64>,
}


/// Parse raw report text into normalized entries for one granularity.
///
/// An absent or empty period array is the "No usage data" condition; a
/// payload that is not JSON surfaces the underlying parse message.
pub fn parse_report(raw: &str, granularity: Granularity) -> Result<Vec<UsageEntry>, UsageError> {
    let report: RawReport = serde_json::from_str(raw)?;

    let periods = match granularity {
        Granularity::Daily => report.daily,
        Granularity::Weekly => report.weekly,
    }
    .unwrap_or_default();

    if periods.is_empty() {
        return Err(UsageError::NoData);
    }

    Ok(periods.into_iter().map(normalize_period).collect())
}


fn normalize_period(raw: RawPeriod) -> UsageEntry {
    UsageEntry {
        date: raw.date,
        total_cost: raw.total_cost.unwrap_or(0.0),
        input_tokens: raw.input_tokens.unwrap_or(0),
        output_tokens: raw.output_tokens.unwrap_or(0),
        total_tokens: raw.total_tokens.unwrap_or(0),
        breakdowns: raw
            .model_breakdowns
            .into_iter()
            .map(normalize_breakdown)
            .collect(),
    }
}


fn normalize_breakdown(raw: RawBreakdown) -> ModelBreakdown {
    let mut breakdown = ModelBreakdown {
        model_name: raw.model_name,
        cost: raw.cost.unwrap_or(0.0),
        input_tokens: raw.input_tokens.unwrap_or(0),
        output_tokens: raw.output_tokens.unwrap_or(0),
        cache_creation_tokens: raw.cache_creation_tokens.unwrap_or(0),
        cache_read_tokens: raw.cache_read_tokens.unwrap_or(0),
        total_tokens: 0,
    };

    // Upstream total wins when present, otherwise derive it
    let derived = breakdown.summed_tokens();
    breakdown.total_tokens = raw.total_tokens.unwrap_or(derived);

    breakdown
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_daily_report() {
        let raw = r#"{
            "daily": [
                {
                    "date": "2025-08-03",
                    "totalCost": 12.5,
                    "inputTokens": 1000,
                    "outputTokens": 500,
                    "totalTokens": 1500,
                    "modelBreakdowns": [
                        {
                            "modelName": "claude-3-5-sonnet-20241022",
                            "cost": 12.5,
                            "inputTokens": 1000,
                            "outputTokens": 500,
                            "cacheCreationTokens": 0,
                            "cacheReadTokens": 0,
                            "totalTokens": 1500
                        }
                    ]
                }
            ]
        }"#;

        let entries = parse_report(raw, Granularity::Daily).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2025-08-03");
        assert_eq!(entries[0].total_cost, 12.5);
        assert_eq!(entries[0].total_tokens, 1500);
        assert_eq!(entries[0].breakdowns[0].model_name, "claude-3-5-sonnet-20241022");
    }

    #[test]
    fn test_breakdown_total_derived_when_absent() {
        let raw = r#"{
            "daily": [
                {
                    "date": "2025-08-03",
                    "modelBreakdowns": [
                        {
                            "modelName": "claude-3-opus-20240229",
                            "inputTokens": 100,
                            "outputTokens": 50,
                            "cacheCreationTokens": 10,
                            "cacheReadTokens": 5
                        }
                    ]
                }
            ]
        }"#;

        let entries = parse_report(raw, Granularity::Daily).unwrap();
        assert_eq!(entries[0].breakdowns[0].total_tokens, 165);
    }

    #[test]
    fn test_explicit_breakdown_total_wins() {
        let raw = r#"{
            "daily": [
                {
                    "date": "2025-08-03",
                    "modelBreakdowns": [
                        {
                            "modelName": "claude-3-opus-20240229",
                            "inputTokens": 100,
                            "outputTokens": 50,
                            "totalTokens": 999
                        }
                    ]
                }
            ]
        }"#;

        let entries = parse_report(raw, Granularity::Daily).unwrap();
        assert_eq!(entries[0].breakdowns[0].total_tokens, 999);
        assert_eq!(entries[0].breakdowns[0].cache_read_tokens, 0);
    }

    #[test]
    fn test_missing_entry_fields_default_to_zero() {
        let raw = r#"{"weekly": [{"week": "2025-07-28"}]}"#;

        let entries = parse_report(raw, Granularity::Weekly).unwrap();
        assert_eq!(entries[0].date, "2025-07-28");
        assert_eq!(entries[0].total_cost, 0.0);
        assert_eq!(entries[0].total_tokens, 0);
        assert!(entries[0].breakdowns.is_empty());
    }

    #[test]
    fn test_empty_array_is_no_data() {
        let err = parse_report(r#"{"daily": []}"#, Granularity::Daily).unwrap_err();
        assert!(matches!(err, UsageError::NoData));
        assert_eq!(err.to_string(), "No usage data");
    }

    #[test]
    fn test_missing_key_is_no_data() {
        let err = parse_report(r#"{"weekly": []}"#, Granularity::Daily).unwrap_err();
        assert!(matches!(err, UsageError::NoData));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_report("ccusage: command exploded", Granularity::Daily).unwrap_err();
        assert!(matches!(err, UsageError::Parse(_)));
    }
}
