//! Metric source errors.

use thiserror::Error;

/// Failures reported by a [`MetricSource`](crate::MetricSource).
///
/// Every variant is recoverable from the engine's point of view: a probe
/// that receives one reports UNKNOWN and the remaining probes still run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Metric source unreachable: {0}")]
    Unreachable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Managed object not found: {0}")]
    ObjectNotFound(String),

    #[error("Attribute '{attribute}' not found on {object}")]
    AttributeNotFound { object: String, attribute: String },

    #[error("Unexpected type for {what}: expected {expected}")]
    UnexpectedType { what: String, expected: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
