//! Datasource connection pool probe.

use tracing::debug;

use statwatch_protocols::{MetricSource, StatNode, Statistic};

use super::{fetch_group, require};
use crate::error::ProbeError;
use crate::format::{item_ratio, perf_bounded, perf_value};
use crate::result::{Findings, ProbeResult};
use crate::selection::Selection;

const GROUP: &str = "connectionPoolModule";
const SETTINGS: &str = "JDBC Connection Pools";
const PREFIX: &str = "datasource active count: ";

/// Datasources managed by the platform itself.
const EXCLUDED: &[&str] = &["jdbc/DefaultEJBTimerDataSource"];

pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let selection = Selection::parse(selection)?;
    let stats = fetch_group(source, GROUP, SETTINGS)?;

    let mut findings = Findings::new();
    for provider in stats.sub_stats() {
        for datasource in provider.sub_stats() {
            if EXCLUDED.contains(&datasource.name.as_str()) {
                continue;
            }
            let Some(thresholds) = selection.lookup(&datasource.name) else {
                continue;
            };

            let usage = PoolUsage::read(datasource, SETTINGS)?;
            findings.push_perf(usage.perf_data("jdbc", &datasource.name));

            let outcome = thresholds.evaluate_ratio(usage.active, usage.max_size);
            debug!(datasource = %datasource.name, active = usage.active, max = usage.max_size, %outcome, "Evaluated datasource");
            findings.record(outcome, || {
                item_ratio(&datasource.name, usage.active, usage.max_size)
            });
        }
    }

    Ok(findings.into_result(PREFIX))
}

/// Connection pool statistics shared by datasources and messaging
/// connection factories.
#[derive(Debug, Clone, Copy)]
pub(super) struct PoolUsage {
    pub current_size: i64,
    pub max_size: i64,
    pub waiting: i64,
    /// Connections handed out: pool size minus free connections.
    pub active: i64,
}

impl PoolUsage {
    const POOL_SIZE: &'static str = "PoolSize";
    const FREE_POOL_SIZE: &'static str = "FreePoolSize";
    const WAITING_THREAD_COUNT: &'static str = "WaitingThreadCount";

    pub fn read(node: &StatNode, settings: &'static str) -> Result<Self, ProbeError> {
        let (current_size, max_size) =
            require(node, Self::POOL_SIZE, settings, Statistic::as_bounded)?;
        let free = require(node, Self::FREE_POOL_SIZE, settings, Statistic::as_range_current)?;
        let waiting = require(
            node,
            Self::WAITING_THREAD_COUNT,
            settings,
            Statistic::as_range_current,
        )?;

        Ok(Self {
            current_size,
            max_size,
            waiting,
            active: current_size - free,
        })
    }

    pub fn perf_data(&self, kind: &str, name: &str) -> String {
        [
            perf_bounded(&format!("{}-{}-size", kind, name), self.current_size, self.max_size),
            perf_bounded(
                &format!("{}-{}-activeThreadCount", kind, name),
                self.active,
                self.max_size,
            ),
            perf_value(&format!("{}-{}-waitingThreadCount", kind, name), self.waiting),
        ]
        .join(" ")
    }
}
