//! JVM heap and CPU probe.

use tracing::debug;

use statwatch_protocols::{MetricSource, Statistic};

use super::{fetch_group, require};
use crate::error::ProbeError;
use crate::format::perf_bounded;
use crate::result::ProbeResult;
use crate::selection::SingleSelection;

const GROUP: &str = "jvmRuntimeModule";
const SETTINGS: &str = "JVM Runtime";

const HEAP_SIZE: &str = "HeapSize";
const USED_MEMORY: &str = "UsedMemory";
const CPU_USAGE: &str = "ProcessCpuUsage";

/// Heap usage as a ratio of the maximum heap. Memory statistics are in
/// KB and reported in MB.
pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let thresholds = SingleSelection::parse(selection)?.thresholds;
    let stats = fetch_group(source, GROUP, SETTINGS)?;

    let (heap_current, heap_max) = require(&stats, HEAP_SIZE, SETTINGS, Statistic::as_bounded)?;
    let used = require(&stats, USED_MEMORY, SETTINGS, Statistic::as_count)?;
    let cpu = require(&stats, CPU_USAGE, SETTINGS, Statistic::as_count)?;

    let max_memory = heap_max / 1024;
    let heap_size = heap_current / 1024;
    let heap_used = used / 1024;

    let perf_data = [
        perf_bounded("jvm-heapSize", format!("{}MB", heap_size), max_memory),
        perf_bounded("jvm-heapUsed", format!("{}MB", heap_used), max_memory),
        perf_bounded("jvm-cpu", format!("{}%", cpu), 100),
    ]
    .join(" ");

    let severity = thresholds.evaluate_ratio(heap_used, max_memory);
    debug!(heap_used, max_memory, %severity, "Evaluated JVM heap");

    let message = if severity.is_alert() {
        format!("memory used ({}/{})", heap_used, max_memory)
    } else {
        String::new()
    };

    Ok(ProbeResult::new(severity, message, perf_data))
}
