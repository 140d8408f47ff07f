//! Thread pool probe.

use tracing::debug;

use statwatch_protocols::{MetricSource, Statistic};

use super::{fetch_group, require};
use crate::error::ProbeError;
use crate::format::{item_ratio, join_messages, perf_bounded};
use crate::result::{Findings, ProbeResult};
use crate::selection::{Selection, ThresholdSpec};

const GROUP: &str = "threadPoolModule";
const SETTINGS: &str = "Thread Pools";

const POOL_SIZE: &str = "PoolSize";
const ACTIVE_COUNT: &str = "ActiveCount";
const HUNG_COUNT: &str = "ConcurrentHungThreadCount";

const ACTIVE_PREFIX: &str = "thread pool active count: ";
const HUNG_PREFIX: &str = "thread pool hung count: ";

/// Fixed limits for the hung-thread sub-check, in percent of the pool size.
const HUNG_THRESHOLDS: ThresholdSpec = ThresholdSpec {
    warning: 10,
    critical: 20,
};

/// Platform versions that publish a hung-thread count.
fn reports_hung_threads(version: &str) -> bool {
    version.starts_with("7.") || version.starts_with("8.")
}

pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let selection = Selection::parse(selection)?;
    let stats = fetch_group(source, GROUP, SETTINGS)?;
    let hung_check = reports_hung_threads(&source.server_version()?);

    let mut findings = Findings::new();
    let mut hung = Vec::new();

    for pool in stats.sub_stats() {
        let Some(thresholds) = selection.lookup(&pool.name) else {
            continue;
        };

        let (current_size, max_size) = require(pool, POOL_SIZE, SETTINGS, Statistic::as_bounded)?;
        let active = require(pool, ACTIVE_COUNT, SETTINGS, Statistic::as_range_current)?;

        let mut perf_data = format!(
            "{} {}",
            perf_bounded(&format!("pool-{}-size", pool.name), current_size, max_size),
            perf_bounded(&format!("pool-{}-activeCount", pool.name), active, max_size),
        );

        let outcome = thresholds.evaluate_ratio(active, max_size);
        debug!(pool = %pool.name, active, max_size, %outcome, "Evaluated thread pool");
        findings.record(outcome, || item_ratio(&pool.name, active, max_size));

        // A missing hung count means thread monitoring is switched off on
        // the instance; the pool is still reported.
        if hung_check {
            if let Some(hung_count) = pool.statistic(HUNG_COUNT).and_then(Statistic::as_range_current) {
                perf_data.push(' ');
                perf_data.push_str(&perf_bounded(
                    &format!("pool-{}-hungCount", pool.name),
                    hung_count,
                    max_size,
                ));

                let outcome = HUNG_THRESHOLDS.evaluate_ratio(hung_count, max_size);
                if outcome.is_alert() {
                    hung.push(item_ratio(&pool.name, hung_count, max_size));
                    findings.escalate(outcome);
                }
            }
        }

        findings.push_perf(perf_data);
    }

    let active_message = findings.take_message(ACTIVE_PREFIX);
    let hung_message = join_messages(HUNG_PREFIX, hung);
    let message = if !active_message.is_empty() && !hung_message.is_empty() {
        format!("{} - {}", active_message, hung_message)
    } else {
        format!("{}{}", active_message, hung_message)
    };

    Ok(ProbeResult::new(
        findings.severity(),
        message,
        findings.take_perf_data(),
    ))
}
