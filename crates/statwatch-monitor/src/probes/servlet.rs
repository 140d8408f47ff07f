//! Servlet response time probe.

use statwatch_protocols::{MetricSource, Statistic};

use super::require;
use crate::error::ProbeError;
use crate::format::{item_value, perf_value};
use crate::result::{Findings, ProbeResult};
use crate::selection::Selection;

const GROUP: &str = "webAppModule";
const SETTINGS: &str = "Web Applications";
const PREFIX: &str = "servlet response time: ";

const SERVICE_TIME: &str = "ServiceTime";

const EXCLUDED: &[&str] = &["rspservlet"];

/// Mean service time in ms, compared after rounding half-up.
///
/// Tree layout: web module → servlets module → servlet. An instance that
/// does not expose the group at all reports OK with no output.
pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let selection = Selection::parse(selection)?;

    let mut findings = Findings::new();
    let Some(stats) = source.fetch_stats(GROUP)? else {
        return Ok(findings.into_result(PREFIX));
    };

    for module in stats.sub_stats() {
        for servlets in module.sub_stats() {
            for servlet in servlets.sub_stats() {
                if EXCLUDED.contains(&servlet.name.as_str()) {
                    continue;
                }
                let Some(thresholds) = selection.lookup(&servlet.name) else {
                    continue;
                };

                let mean = require(servlet, SERVICE_TIME, SETTINGS, Statistic::as_time_mean)?;
                let shown = format!("{:.2}", mean);
                findings.push_perf(perf_value(&format!("servlet-{}-serviceTime", servlet.name), &shown));

                let outcome = thresholds.evaluate((mean + 0.5).floor() as i64);
                findings.record(outcome, || item_value(&servlet.name, &shown));
            }
        }
    }

    Ok(findings.into_result(PREFIX))
}
