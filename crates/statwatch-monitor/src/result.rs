//! Probe results.

use serde::{Deserialize, Serialize};

use crate::format;
use crate::severity::Severity;

/// Output of one probe invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub severity: Severity,

    /// Diagnostic message, empty when the probe is OK.
    pub message: String,

    /// Performance data, populated for OK results too.
    pub perf_data: String,
}

impl ProbeResult {
    pub fn new(severity: Severity, message: impl Into<String>, perf_data: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            perf_data: perf_data.into(),
        }
    }

    /// An evaluation that could not complete.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message, String::new())
    }
}

/// Running accumulator of one probe's evaluation loop.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    severity: Severity,
    messages: Vec<String>,
    perf_data: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item outcome. Alerts add a message fragment and raise
    /// the running severity.
    pub fn record(&mut self, outcome: Severity, describe: impl FnOnce() -> String) {
        if outcome.is_alert() {
            self.messages.push(describe());
            self.escalate(outcome);
        }
    }

    pub fn escalate(&mut self, outcome: Severity) {
        self.severity = self.severity.escalate(outcome);
    }

    pub fn push_perf(&mut self, fragment: String) {
        self.perf_data.push(fragment);
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn push_message(&mut self, fragment: String) {
        self.messages.push(fragment);
    }

    /// Joined perf data, for probes that assemble their message themselves.
    pub fn take_perf_data(&mut self) -> String {
        format::join_perf_data(std::mem::take(&mut self.perf_data))
    }

    /// Joined messages, for probes that assemble their message themselves.
    pub fn take_message(&mut self, prefix: &str) -> String {
        format::join_messages(prefix, std::mem::take(&mut self.messages))
    }

    pub fn into_result(mut self, prefix: &str) -> ProbeResult {
        let message = self.take_message(prefix);
        let perf_data = self.take_perf_data();
        ProbeResult::new(self.severity, message, perf_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_result() {
        let result = ProbeResult::unknown("connection refused");
        assert_eq!(result.severity, Severity::Unknown);
        assert_eq!(result.message, "connection refused");
        assert!(result.perf_data.is_empty());
    }

    #[test]
    fn test_findings_all_ok() {
        let mut findings = Findings::new();
        findings.record(Severity::Ok, || unreachable!("OK items carry no message"));
        findings.push_perf("app-b=1".to_string());
        findings.push_perf("app-a=2".to_string());

        let result = findings.into_result("HTTP session count: ");
        assert_eq!(result.severity, Severity::Ok);
        assert_eq!(result.message, "");
        assert_eq!(result.perf_data, "app-a=2 app-b=1");
    }

    #[test]
    fn test_findings_escalates_to_worst() {
        let mut findings = Findings::new();
        findings.record(Severity::Critical, || "'b' (9)".to_string());
        findings.record(Severity::Warning, || "'a' (5)".to_string());

        let result = findings.into_result("prefix: ");
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.message, "prefix: 'a' (5), 'b' (9)");
    }

    #[test]
    fn test_findings_take_message_empties_list() {
        let mut findings = Findings::new();
        findings.record(Severity::Warning, || "x".to_string());
        assert!(findings.has_messages());
        assert_eq!(findings.take_message("p: "), "p: x");
        assert!(!findings.has_messages());
        assert_eq!(findings.severity(), Severity::Warning);
    }
}
