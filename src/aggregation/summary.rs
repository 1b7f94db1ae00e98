//! Per-family roll-up across the filtered window.

use crate::models::{ModelFamily, UsageEntry};


/// One aggregate row per model family across the whole window.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct ModelSummary {
    pub family: ModelFamily,
    pub cost: f64,
    pub input_tokens: i64,
    pub output_tokens: i64,
    pub total_tokens: i64,
}


impl ModelSummary {
    fn new(family: ModelFamily) -> Self {
        Self {
            family,
            cost: 0.0,
            input_tokens: 0,
            output_tokens: 0,
            total_tokens: 0,
        }
    }
}


/// Roll every model breakdown into its family bucket.
///
/// Classification is re-derived from each model name rather than cached on
/// the breakdown. Buckets whose total-token sum is zero are omitted; the
/// rest come out in fixed display order (Opus, Sonnet, Haiku, Other).
pub fn summarize(entries: &[UsageEntry]) -> Vec<ModelSummary> {
    let mut buckets: Vec<ModelSummary> = ModelFamily::DISPLAY_ORDER
        .iter()
        .map(|f| ModelSummary::new(*f))
        .collect();

    for entry in entries {
        for breakdown in &entry.breakdowns {
            let bucket = &mut buckets[breakdown.family().bucket_index()];
            bucket.cost += breakdown.cost;
            bucket.input_tokens += breakdown.input_tokens;
            bucket.output_tokens += breakdown.output_tokens;
            bucket.total_tokens += breakdown.total_tokens;
        }
    }

    buckets.retain(|b| b.total_tokens > 0);
    buckets
}
