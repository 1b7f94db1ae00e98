//! Error taxonomy for a single refresh cycle.

use thiserror::Error;


/// Everything that can abort a refresh.
///
/// All variants are terminal for the cycle that produced them; none is
/// fatal to the process. The previous successful snapshot stays on screen
/// until the next refresh succeeds.
#[derive(Debug, Error)]
pub enum UsageError {
    /// The external command failed, or wrote diagnostics with no usable
    /// standard output. Carries the diagnostic text verbatim.
    #[error("{0}")]
    Execution(String),

    /// The payload parsed but held no period records.
    #[error("No usage data")]
    NoData,

    /// The payload was not valid JSON.
    #[error("invalid usage report: {0}")]
    Parse(#[from] serde_json::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_message_is_verbatim() {
        let err = UsageError::Execution("command not found: ccusage".to_string());
        assert_eq!(err.to_string(), "command not found: ccusage");
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(UsageError::NoData.to_string(), "No usage data");
    }

    #[test]
    fn test_parse_carries_underlying_message() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let msg = inner.to_string();
        let err = UsageError::from(inner);
        assert!(err.to_string().contains(&msg));
    }
}
