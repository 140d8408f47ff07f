//! HTTP session probe.

use statwatch_protocols::{MetricSource, Statistic};

use super::{fetch_group, require};
use crate::error::ProbeError;
use crate::format::{item_value, perf_value};
use crate::result::{Findings, ProbeResult};
use crate::selection::Selection;

const GROUP: &str = "servletSessionsModule";
const SETTINGS: &str = "Servlet Session Manager";
const PREFIX: &str = "HTTP session count: ";

const LIVE_COUNT: &str = "LiveCount";

const EXCLUDED: &[&str] = &["ibmasyncrsp#ibmasyncrsp.war"];

pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let selection = Selection::parse(selection)?;
    let stats = fetch_group(source, GROUP, SETTINGS)?;

    let mut findings = Findings::new();
    for app in stats.sub_stats() {
        if EXCLUDED.contains(&app.name.as_str()) {
            continue;
        }
        let Some(thresholds) = selection.lookup(&app.name) else {
            continue;
        };

        let live = require(app, LIVE_COUNT, SETTINGS, Statistic::as_range_current)?;
        findings.push_perf(perf_value(&format!("app-{}", app.name), live));
        findings.record(thresholds.evaluate(live), || item_value(&app.name, live));
    }

    Ok(findings.into_result(PREFIX))
}
