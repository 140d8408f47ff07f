//! Probe errors.

use thiserror::Error;

use statwatch_protocols::SourceError;

use crate::selection::SelectionError;

/// Probe error types.
///
/// Only [`ProbeError::MisconfiguredStatistic`] leaves a probe. The other
/// kinds are turned into an UNKNOWN result at the probe boundary.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The metric source could not be queried.
    #[error("{0}")]
    Source(#[from] SourceError),

    /// The threshold selection could not be parsed.
    #[error("malformed selection: {0}")]
    Selection(#[from] SelectionError),

    /// A statistic the probe needs is not collected by the instance.
    #[error("invalid '{group}' statistics settings: '{statistic}' is not collected")]
    MisconfiguredStatistic {
        group: &'static str,
        statistic: String,
    },
}

impl ProbeError {
    pub(crate) fn misconfigured(group: &'static str, statistic: impl Into<String>) -> Self {
        Self::MisconfiguredStatistic {
            group,
            statistic: statistic.into(),
        }
    }

    /// Whether the error must abort the whole request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MisconfiguredStatistic { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misconfigured_is_fatal() {
        let err = ProbeError::misconfigured("Thread Pools", "PoolSize");
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "invalid 'Thread Pools' statistics settings: 'PoolSize' is not collected"
        );
    }

    #[test]
    fn test_source_error_is_not_fatal() {
        let err = ProbeError::from(SourceError::Unreachable("timeout".to_string()));
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Metric source unreachable: timeout");
    }

    #[test]
    fn test_selection_error_is_not_fatal() {
        let err = ProbeError::from(SelectionError::Empty);
        assert!(!err.is_fatal());
        assert!(err.to_string().starts_with("malformed selection"));
    }
}
