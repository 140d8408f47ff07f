//! Transaction manager probe.

use statwatch_protocols::{MetricSource, Statistic};

use super::{fetch_group, require};
use crate::error::ProbeError;
use crate::format::perf_value;
use crate::result::ProbeResult;
use crate::selection::SingleSelection;

const GROUP: &str = "transactionModule";
const SETTINGS: &str = "Transaction Manager";

const ACTIVE_COUNT: &str = "ActiveCount";

pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let thresholds = SingleSelection::parse(selection)?.thresholds;
    let stats = fetch_group(source, GROUP, SETTINGS)?;

    let active = require(&stats, ACTIVE_COUNT, SETTINGS, Statistic::as_count)?;
    let severity = thresholds.evaluate(active);

    let message = if severity.is_alert() {
        format!("transaction active count ({})", active)
    } else {
        String::new()
    };

    Ok(ProbeResult::new(
        severity,
        message,
        perf_value("jta-activeCount", active),
    ))
}
