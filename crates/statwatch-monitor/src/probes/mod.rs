//! Probe family.
//!
//! Every probe queries the metric source, evaluates thresholds per measured
//! item and folds the outcomes into one [`ProbeResult`]. Probes form a
//! closed set dispatched through [`ProbeKind`]; [`ProbeKind::ALL`] fixes the
//! order in which they run and therefore the order of report output.

mod application;
mod datasource;
mod jvm;
mod messaging;
mod queue;
mod servlet;
mod thread_pool;
mod transaction;

use std::fmt;

use tracing::{debug, error, warn};

use statwatch_protocols::{AttributeValue, MetricSource, ObjectId, SourceError, StatNode, Statistic};

use crate::error::ProbeError;
use crate::result::ProbeResult;

/// Shape of the selection string a probe accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionGrammar {
    /// `name,warning,critical|...`, `*` allowed as name.
    PerItem,
    /// `label,warning,critical`.
    Single,
}

impl fmt::Display for SelectionGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionGrammar::PerItem => f.write_str("name,warning,critical[|name,warning,critical...]"),
            SelectionGrammar::Single => f.write_str("label,warning,critical"),
        }
    }
}

/// The known probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Jvm,
    ThreadPool,
    Transaction,
    Datasource,
    Messaging,
    Application,
    Servlet,
    Queue,
}

impl ProbeKind {
    /// Registry in invocation order.
    pub const ALL: [ProbeKind; 8] = [
        ProbeKind::Jvm,
        ProbeKind::ThreadPool,
        ProbeKind::Transaction,
        ProbeKind::Datasource,
        ProbeKind::Messaging,
        ProbeKind::Application,
        ProbeKind::Servlet,
        ProbeKind::Queue,
    ];

    /// Selection key of the probe.
    pub fn name(self) -> &'static str {
        match self {
            ProbeKind::Jvm => "jvm",
            ProbeKind::ThreadPool => "pool",
            ProbeKind::Transaction => "jta",
            ProbeKind::Datasource => "jdbc",
            ProbeKind::Messaging => "jms",
            ProbeKind::Application => "app",
            ProbeKind::Servlet => "servlet",
            ProbeKind::Queue => "queue",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ProbeKind::Jvm => "JVM heap usage against maximum heap, CPU usage",
            ProbeKind::ThreadPool => "thread pool active threads against maximum size, hung threads",
            ProbeKind::Transaction => "active transaction count",
            ProbeKind::Datasource => "datasource connections in use against maximum pool size",
            ProbeKind::Messaging => "messaging factory connections in use, stopped listeners",
            ProbeKind::Application => "live HTTP sessions per web application",
            ProbeKind::Servlet => "mean servlet service time (ms)",
            ProbeKind::Queue => "messaging queue depth",
        }
    }

    pub fn grammar(self) -> SelectionGrammar {
        match self {
            ProbeKind::Jvm | ProbeKind::Transaction => SelectionGrammar::Single,
            _ => SelectionGrammar::PerItem,
        }
    }

    /// Run the probe.
    ///
    /// Source failures and malformed selections come back as an UNKNOWN
    /// result. Only a misconfigured statistic is returned as an error.
    pub fn run(self, source: &dyn MetricSource, selection: &str) -> Result<ProbeResult, ProbeError> {
        debug!(probe = self.name(), selection, "Running probe");

        let outcome = match self {
            ProbeKind::Jvm => jvm::evaluate(source, selection),
            ProbeKind::ThreadPool => thread_pool::evaluate(source, selection),
            ProbeKind::Transaction => transaction::evaluate(source, selection),
            ProbeKind::Datasource => datasource::evaluate(source, selection),
            ProbeKind::Messaging => messaging::evaluate(source, selection),
            ProbeKind::Application => application::evaluate(source, selection),
            ProbeKind::Servlet => servlet::evaluate(source, selection),
            ProbeKind::Queue => queue::evaluate(source, selection),
        };

        match outcome {
            Ok(result) => {
                debug!(probe = self.name(), severity = %result.severity, "Probe finished");
                Ok(result)
            }
            Err(err) if err.is_fatal() => {
                error!(probe = self.name(), "{}", err);
                Err(err)
            }
            Err(err) => {
                warn!(probe = self.name(), "Probe could not complete: {}", err);
                Ok(ProbeResult::unknown(err.to_string()))
            }
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fetch a stat group that must be exposed.
fn fetch_group(
    source: &dyn MetricSource,
    group: &str,
    settings: &'static str,
) -> Result<StatNode, ProbeError> {
    source
        .fetch_stats(group)?
        .ok_or_else(|| ProbeError::misconfigured(settings, group))
}

/// Read a statistic that must be collected.
fn require<T>(
    node: &StatNode,
    statistic: &str,
    settings: &'static str,
    read: fn(&Statistic) -> Option<T>,
) -> Result<T, ProbeError> {
    node.statistic(statistic)
        .and_then(read)
        .ok_or_else(|| ProbeError::misconfigured(settings, format!("{}/{}", node.name, statistic)))
}

fn unexpected(object: &ObjectId, attribute: &str, expected: &'static str) -> SourceError {
    SourceError::UnexpectedType {
        what: format!("{} on {}", attribute, object),
        expected,
    }
}

fn attribute_bool(
    source: &dyn MetricSource,
    object: &ObjectId,
    attribute: &str,
) -> Result<bool, SourceError> {
    source
        .fetch_attribute(object, attribute)?
        .as_bool()
        .ok_or_else(|| unexpected(object, attribute, "bool"))
}

fn attribute_long(
    source: &dyn MetricSource,
    object: &ObjectId,
    attribute: &str,
) -> Result<i64, SourceError> {
    source
        .fetch_attribute(object, attribute)?
        .as_long()
        .ok_or_else(|| unexpected(object, attribute, "long"))
}

fn attribute_text(
    source: &dyn MetricSource,
    object: &ObjectId,
    attribute: &str,
) -> Result<String, SourceError> {
    match source.fetch_attribute(object, attribute)? {
        AttributeValue::Text(text) => Ok(text),
        _ => Err(unexpected(object, attribute, "text")),
    }
}

#[cfg(test)]
#[path = "probes_tests.rs"]
mod tests;
