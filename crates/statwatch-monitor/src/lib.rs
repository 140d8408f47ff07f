//! # statwatch Monitor
//!
//! Severity evaluation and aggregation engine.
//!
//! ## Features
//!
//! - Threshold comparison on raw values and on ratios of a capacity
//! - Eight probes over a [`MetricSource`](statwatch_protocols::MetricSource)
//! - Deterministic merge of probe results into one report line

pub mod aggregator;
pub mod error;
pub mod format;
pub mod probes;
pub mod result;
pub mod selection;
pub mod severity;
pub mod threshold;

pub use aggregator::{AggregateReport, Aggregator, ReportBuilder};
pub use error::ProbeError;
pub use probes::ProbeKind;
pub use result::ProbeResult;
pub use selection::{Selection, SelectionError, SingleSelection, ThresholdSpec};
pub use severity::Severity;
