//! Messaging connection factory probe.

use tracing::debug;

use statwatch_protocols::MetricSource;

use super::datasource::PoolUsage;
use super::{attribute_bool, fetch_group};
use crate::error::ProbeError;
use crate::format::{item_ratio, join_messages};
use crate::result::{Findings, ProbeResult};
use crate::selection::Selection;
use crate::severity::Severity;

const GROUP: &str = "j2cModule";
const SETTINGS: &str = "JCA Connection Pools";
const PREFIX: &str = "factory active count: ";
const STOPPED_PREFIX: &str = "stopped listeners: ";

/// Resource adapters whose factories are messaging factories.
const PROVIDERS: &[&str] = &["SIB JMS Resource Adapter", "WebSphere MQ JMS Provider"];

const LISTENER_PORTS: &str = "WebSphere:*,type=ListenerPort";

pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let selection = Selection::parse(selection)?;
    let stats = fetch_group(source, GROUP, SETTINGS)?;

    let mut stopped = 0usize;
    for listener in source.list_objects(LISTENER_PORTS)? {
        if !attribute_bool(source, &listener, "started")? {
            stopped += 1;
        }
    }

    let mut findings = Findings::new();
    for provider in stats.sub_stats() {
        if !PROVIDERS.contains(&provider.name.as_str()) {
            continue;
        }
        for factory in provider.sub_stats() {
            let Some(thresholds) = selection.lookup(&factory.name) else {
                continue;
            };

            let usage = PoolUsage::read(factory, SETTINGS)?;
            findings.push_perf(usage.perf_data("jms", &factory.name));

            let outcome = thresholds.evaluate_ratio(usage.active, usage.max_size);
            debug!(factory = %factory.name, active = usage.active, max = usage.max_size, %outcome, "Evaluated connection factory");
            findings.record(outcome, || {
                item_ratio(&factory.name, usage.active, usage.max_size)
            });
        }
    }

    if stopped > 0 {
        debug!(stopped, "Stopped listener ports");
        if findings.severity() == Severity::Ok {
            findings.escalate(Severity::Warning);
        }
        if findings.has_messages() {
            let prefix = format!("{}{} - {}", STOPPED_PREFIX, stopped, PREFIX);
            return Ok(findings.into_result(&prefix));
        }
        let perf_data = findings.take_perf_data();
        return Ok(ProbeResult::new(
            findings.severity(),
            join_messages(STOPPED_PREFIX, vec![stopped.to_string()]),
            perf_data,
        ));
    }

    Ok(findings.into_result(PREFIX))
}
