//! Aggregation of probe results into one report.
//!
//! Probes run in registry order. Their results are merged into a
//! request-scoped [`ReportBuilder`] which is consumed into an immutable
//! [`AggregateReport`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use statwatch_protocols::MetricSource;

use crate::error::ProbeError;
use crate::probes::ProbeKind;
use crate::result::ProbeResult;
use crate::severity::Severity;

/// Final output of one aggregation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    pub severity: Severity,
    /// `<instance>: status <NAME>`, followed by ` - <message>` when the
    /// status is not OK and some probe produced a message.
    pub header: String,
    pub perf_data: String,
}

impl AggregateReport {
    pub fn code(&self) -> u8 {
        self.severity.code()
    }
}

impl fmt::Display for AggregateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.code(), self.header, self.perf_data)
    }
}

/// Accumulator for probe results within one request.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    severity: Severity,
    message: String,
    perf_data: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one probe result.
    ///
    /// WARNING and CRITICAL only ever raise the running status. UNKNOWN is
    /// assigned unconditionally and its perf data, if any, is dropped.
    pub fn merge(&mut self, result: ProbeResult) {
        let keep_perf = match result.severity {
            Severity::Ok => true,
            Severity::Warning | Severity::Critical => {
                if self.severity.code() < result.severity.code() {
                    self.severity = result.severity;
                }
                true
            }
            Severity::Unknown => {
                self.severity = Severity::Unknown;
                false
            }
        };

        if result.severity != Severity::Ok && !result.message.is_empty() {
            if !self.message.is_empty() {
                self.message.push_str(" - ");
            }
            self.message.push_str(&result.message);
        }

        if keep_perf && !result.perf_data.is_empty() {
            if !self.perf_data.is_empty() {
                self.perf_data.push(' ');
            }
            self.perf_data.push_str(&result.perf_data);
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Messages of the non-OK probes merged so far, joined with `" - "`.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn finish(self, instance: &str) -> AggregateReport {
        let mut header = format!("{}: status {}", instance, self.severity);
        if self.severity != Severity::Ok && !self.message.is_empty() {
            header.push_str(" - ");
            header.push_str(&self.message);
        }

        AggregateReport {
            severity: self.severity,
            header,
            perf_data: self.perf_data,
        }
    }
}

/// Runs the selected probes against a metric source.
#[derive(Debug, Clone)]
pub struct Aggregator {
    probes: Vec<ProbeKind>,
}

impl Aggregator {
    /// Aggregator over the full registry.
    pub fn new() -> Self {
        Self {
            probes: ProbeKind::ALL.to_vec(),
        }
    }

    /// Aggregator over a custom ordered probe list.
    pub fn with_probes(probes: Vec<ProbeKind>) -> Self {
        Self { probes }
    }

    pub fn probes(&self) -> &[ProbeKind] {
        &self.probes
    }

    /// Run every probe whose name has a selection and merge the results.
    ///
    /// Selection keys that name no probe are ignored. A misconfigured
    /// statistic aborts the request: remaining probes are not run.
    pub fn process(
        &self,
        source: &dyn MetricSource,
        instance: &str,
        selections: &BTreeMap<String, String>,
    ) -> Result<AggregateReport, ProbeError> {
        let mut report = ReportBuilder::new();

        for kind in &self.probes {
            let Some(selection) = selections.get(kind.name()) else {
                continue;
            };
            report.merge(kind.run(source, selection)?);
        }

        for key in selections.keys() {
            if ProbeKind::from_name(key).is_none() {
                debug!(key = %key, "Ignoring selection for unknown probe");
            }
        }

        let report = report.finish(instance);
        info!(instance, severity = %report.severity, "Aggregated probe results");
        Ok(report)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
